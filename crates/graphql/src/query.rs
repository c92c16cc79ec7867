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
use crate::objects::{Product, Review, User, parse_id};
use crate::selection::requested_fields;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context.users.get(parse_id(&id)?, &fields).await?)
    }

    async fn users(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0)] offset: i64,
        #[graphql(default = 20)] limit: i64,
    ) -> Result<Vec<User>> {
        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context.users.get_list(&fields, offset, limit).await?)
    }

    async fn product(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Product>> {
        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context.products.get(parse_id(&id)?, &fields).await?)
    }

    async fn products(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0)] offset: i64,
        #[graphql(default = 20)] limit: i64,
    ) -> Result<Vec<Product>> {
        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context.products.get_list(&fields, offset, limit).await?)
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context.reviews.get(parse_id(&id)?, &fields).await?)
    }

    async fn reviews(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0)] offset: i64,
        #[graphql(default = 20)] limit: i64,
    ) -> Result<Vec<Review>> {
        let context = ctx.data::<RequestContext>()?;
        let fields = requested_fields(ctx.field());
        Ok(context
            .reviews
            .get_list(&fields, offset, limit, None, None)
            .await?)
    }
}
