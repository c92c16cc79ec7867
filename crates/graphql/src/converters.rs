// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Pure DTO → API-object mapping. Foreign keys land in the underscore-named
//! internal slots; eagerly attached related DTOs are promoted to nested API
//! objects.

use storefront_model::{ProductDto, ReviewDto, UserDto};

use crate::objects::{Product, Review, User};

pub(crate) fn user_from_dto(dto: UserDto) -> User {
    User {
        id: dto.id,
        username: dto.username,
        attached_reviews: dto
            .reviews
            .map(|reviews| reviews.into_iter().map(review_from_dto).collect())
            .unwrap_or_default(),
    }
}

pub(crate) fn product_from_dto(dto: ProductDto) -> Product {
    Product {
        id: dto.id,
        title: dto.title,
        description: dto.description,
        attached_reviews: dto
            .reviews
            .map(|reviews| reviews.into_iter().map(review_from_dto).collect())
            .unwrap_or_default(),
    }
}

pub(crate) fn review_from_dto(dto: ReviewDto) -> Review {
    Review {
        id: dto.id,
        content: dto.content,
        user_id: dto.user_id,
        product_id: dto.product_id,
        attached_user: dto.user.map(user_from_dto),
        attached_product: dto.product.map(product_from_dto),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_keeps_foreign_keys_and_promotes_attached_rows() {
        let dto = ReviewDto {
            id: Some(5),
            content: Some("nice".to_owned()),
            user_id: Some(3),
            product_id: Some(7),
            user: Some(UserDto {
                id: Some(3),
                username: Some("ada".to_owned()),
                reviews: None,
            }),
            product: None,
        };

        let review = review_from_dto(dto);

        assert_eq!(review.user_id, Some(3));
        assert_eq!(review.product_id, Some(7));
        let user = review.attached_user.as_ref().unwrap();
        assert_eq!(user.username.as_deref(), Some("ada"));
        assert!(review.attached_product.is_none());
    }

    #[test]
    fn partial_dto_maps_to_partial_object() {
        let dto = UserDto {
            id: None,
            username: Some("ada".to_owned()),
            reviews: None,
        };

        let user = user_from_dto(dto);

        assert_eq!(user.id, None);
        assert!(user.attached_reviews.is_empty());
    }
}
