// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::SelectionField;

use storefront_model::RequestedField;

/// View the sub-selections of the current GraphQL field as the engine-neutral
/// requested-field tree the translator works on.
pub(crate) fn requested_fields(field: SelectionField<'_>) -> Vec<RequestedField> {
    field.selection_set().map(requested_field).collect()
}

fn requested_field(field: SelectionField<'_>) -> RequestedField {
    RequestedField {
        name: field.name().to_owned(),
        children: field.selection_set().map(requested_field).collect(),
    }
}
