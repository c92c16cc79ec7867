// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::column::Column;
use super::expression_builder::ExpressionBuilder;
use super::sql_builder::SqlBuilder;

/// A predicate usable in a WHERE clause. Only the forms needed by the
/// storefront stores are represented: the trivially true predicate (rendered
/// by omitting the WHERE clause) and column equality.
#[derive(Debug, Clone)]
pub enum ConcretePredicate {
    True,
    Eq(Column, Column),
}

impl ConcretePredicate {
    pub fn is_true(&self) -> bool {
        matches!(self, ConcretePredicate::True)
    }
}

impl ExpressionBuilder for ConcretePredicate {
    fn build(&self, builder: &mut SqlBuilder) {
        match self {
            ConcretePredicate::True => builder.push_str("TRUE"),
            ConcretePredicate::Eq(lhs, rhs) => {
                lhs.build(builder);
                builder.push_str(" = ");
                rhs.build(builder);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::physical_column::PhysicalColumn;
    use crate::sql::sql_param::SqlParamContainer;

    #[test]
    fn eq_param() {
        let predicate = ConcretePredicate::Eq(
            Column::Physical(PhysicalColumn {
                table_name: "reviews",
                name: "id",
            }),
            Column::Param(SqlParamContainer::i32(5)),
        );

        assert_binding!(predicate.to_sql(), r#""reviews"."id" = $1"#, 5);
    }

    #[test]
    fn eq_columns() {
        let predicate = ConcretePredicate::Eq(
            Column::Physical(PhysicalColumn {
                table_name: "reviews",
                name: "user_id",
            }),
            Column::Physical(PhysicalColumn {
                table_name: "users",
                name: "id",
            }),
        );

        assert_binding!(predicate.to_sql(), r#""reviews"."user_id" = "users"."id""#);
    }
}
