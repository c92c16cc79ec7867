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
use crate::objects::{Product, User};
use crate::resolvers::{RelationSource, relation_source};
use crate::selection::requested_fields;

#[derive(Debug, Clone, Default)]
pub struct Review {
    pub id: Option<i32>,
    pub content: Option<String>,
    pub user_id: Option<i32>,
    pub product_id: Option<i32>,
    pub attached_user: Option<User>,
    pub attached_product: Option<Product>,
}

#[Object]
impl Review {
    async fn id(&self) -> Option<ID> {
        self.id.map(|id| ID(id.to_string()))
    }

    async fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Raw foreign key. Do not use this field for queries.
    #[graphql(name = "_userId")]
    async fn user_id(&self) -> Option<ID> {
        self.user_id.map(|id| ID(id.to_string()))
    }

    /// Raw foreign key. Do not use this field for queries.
    #[graphql(name = "_productId")]
    async fn product_id(&self) -> Option<ID> {
        self.product_id.map(|id| ID(id.to_string()))
    }

    /// Author attached by an eager join. Do not use this field for queries.
    #[graphql(name = "_user")]
    async fn pre_attached_user(&self) -> Option<&User> {
        self.attached_user.as_ref()
    }

    /// Product attached by an eager join. Do not use this field for queries.
    #[graphql(name = "_product")]
    async fn pre_attached_product(&self) -> Option<&Product> {
        self.attached_product.as_ref()
    }

    /// The review's author: pre-attached value when present, otherwise a
    /// point lookup by the foreign key, otherwise a reverse lookup through
    /// this review's id.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        match relation_source(self.attached_user.is_some(), self.user_id, self.id)? {
            RelationSource::PreAttached => Ok(self.attached_user.clone()),
            RelationSource::ForeignKey(user_id) => {
                let context = ctx.data::<RequestContext>()?;
                let fields = requested_fields(ctx.field());
                Ok(context.users.get(user_id, &fields).await?)
            }
            RelationSource::ReviewLookup(review_id) => {
                let context = ctx.data::<RequestContext>()?;
                let fields = requested_fields(ctx.field());
                Ok(Some(context.users.get_by_review_id(review_id, &fields).await?))
            }
        }
    }

    /// The reviewed product, resolved the same way as `user`.
    async fn product(&self, ctx: &Context<'_>) -> Result<Option<Product>> {
        match relation_source(self.attached_product.is_some(), self.product_id, self.id)? {
            RelationSource::PreAttached => Ok(self.attached_product.clone()),
            RelationSource::ForeignKey(product_id) => {
                let context = ctx.data::<RequestContext>()?;
                let fields = requested_fields(ctx.field());
                Ok(context.products.get(product_id, &fields).await?)
            }
            RelationSource::ReviewLookup(review_id) => {
                let context = ctx.data::<RequestContext>()?;
                let fields = requested_fields(ctx.field());
                Ok(Some(
                    context.products.get_by_review_id(review_id, &fields).await?,
                ))
            }
        }
    }
}
