// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::{Context, ID, MergedObject, Object, Result};

use crate::context::RequestContext;
use crate::objects::{
    CreateProductInput, CreateReviewInput, Deleted, DeletedUser, Product, RegisterUserInput,
    Review, Updated, UpdateProductInput, UpdateReviewInput, UpdateUserInput, User, parse_id,
};

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn register_user(&self, ctx: &Context<'_>, input: RegisterUserInput) -> Result<User> {
        let context = ctx.data::<RequestContext>()?;
        Ok(context.users.register(input.username).await?)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<Option<User>> {
        let context = ctx.data::<RequestContext>()?;
        Ok(context.users.update(parse_id(&id)?, input.username).await?)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<DeletedUser> {
        let context = ctx.data::<RequestContext>()?;
        let deleted = context.users.delete(parse_id(&id)?).await?;

        Ok(if deleted {
            DeletedUser {
                id,
                success: true,
                message: "User was deleted successfully!".to_owned(),
            }
        } else {
            DeletedUser {
                id,
                success: false,
                message: "User was not deleted".to_owned(),
            }
        })
    }
}

#[derive(Default)]
pub struct ProductMutation;

#[Object]
impl ProductMutation {
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        input: CreateProductInput,
    ) -> Result<Product> {
        let context = ctx.data::<RequestContext>()?;
        Ok(context
            .products
            .create(input.title, input.description)
            .await?)
    }

    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateProductInput,
    ) -> Result<Updated> {
        let context = ctx.data::<RequestContext>()?;
        let updated = context
            .products
            .update(parse_id(&id)?, input.title, input.description)
            .await?;

        Ok(if updated {
            Updated {
                success: true,
                message: "OK".to_owned(),
            }
        } else {
            Updated {
                success: false,
                message: "Product not found".to_owned(),
            }
        })
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> Result<Deleted> {
        let context = ctx.data::<RequestContext>()?;
        let success = context.products.delete(parse_id(&id)?).await?;

        Ok(Deleted {
            success,
            message: None,
        })
    }
}

#[derive(Default)]
pub struct ReviewMutation;

#[Object]
impl ReviewMutation {
    async fn create_review(&self, ctx: &Context<'_>, input: CreateReviewInput) -> Result<Review> {
        let context = ctx.data::<RequestContext>()?;
        Ok(context
            .reviews
            .create(
                input.content,
                parse_id(&input.user_id)?,
                parse_id(&input.product_id)?,
            )
            .await?)
    }

    async fn update_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateReviewInput,
    ) -> Result<Updated> {
        let context = ctx.data::<RequestContext>()?;
        let updated = context.reviews.update(parse_id(&id)?, input.content).await?;

        Ok(if updated {
            Updated {
                success: true,
                message: "OK".to_owned(),
            }
        } else {
            Updated {
                success: false,
                message: "Review not found".to_owned(),
            }
        })
    }

    async fn delete_review(&self, ctx: &Context<'_>, id: ID) -> Result<Deleted> {
        let context = ctx.data::<RequestContext>()?;
        let success = context.reviews.delete(parse_id(&id)?).await?;

        Ok(Deleted {
            success,
            message: None,
        })
    }
}

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, ProductMutation, ReviewMutation);
