// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::{Context, ID, Object, Result};

use crate::context::RequestContext;
use crate::objects::Review;
use crate::selection::requested_fields;

#[derive(Debug, Clone, Default)]
pub struct Product {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub attached_reviews: Vec<Review>,
}

#[Object]
impl Product {
    async fn id(&self) -> Option<ID> {
        self.id.map(|id| ID(id.to_string()))
    }

    async fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    async fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Reviews attached by an eager join. Do not use this field for queries.
    #[graphql(name = "_reviews")]
    async fn pre_attached_reviews(&self) -> &[Review] {
        &self.attached_reviews
    }

    /// The product's reviews. Served from the pre-attached set without
    /// touching the store when an eager join already fetched it.
    async fn reviews(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0)] offset: i64,
        #[graphql(default = 20)] limit: i64,
    ) -> Result<Vec<Review>> {
        if !self.attached_reviews.is_empty() {
            return Ok(self.attached_reviews.clone());
        }
        let Some(id) = self.id else {
            return Ok(vec![]);
        };

        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context
            .reviews
            .get_list(&fields, offset, limit, None, Some(id))
            .await?)
    }
}
