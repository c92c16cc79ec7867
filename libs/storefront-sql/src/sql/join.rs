// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::expression_builder::ExpressionBuilder;
use super::physical_table::PhysicalTable;
use super::predicate::ConcretePredicate;
use super::sql_builder::SqlBuilder;
use super::table::Table;

/// Represents a join between two tables. Currently, supports only left join.
#[derive(Debug)]
pub struct LeftJoin {
    /// The left side of the join such as `reviews` (possibly itself a join).
    left: Box<Table>,
    /// The right table in the join such as `users`.
    right: PhysicalTable,
    /// The join predicate such as `reviews.user_id = users.id`.
    predicate: ConcretePredicate,
}

impl LeftJoin {
    pub fn new(left: Table, right: PhysicalTable, predicate: ConcretePredicate) -> Self {
        LeftJoin {
            left: Box::new(left),
            right,
            predicate,
        }
    }
}

impl ExpressionBuilder for LeftJoin {
    /// Build expression of the form `<left> LEFT JOIN <right> ON <predicate>`.
    fn build(&self, builder: &mut SqlBuilder) {
        self.left.build(builder);
        builder.push_str(" LEFT JOIN ");
        self.right.build(builder);
        builder.push_str(" ON ");
        self.predicate.build(builder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::column::Column;
    use crate::sql::physical_column::PhysicalColumn;

    #[test]
    fn basic_join() {
        let join = LeftJoin::new(
            Table::Physical(PhysicalTable { name: "reviews" }),
            PhysicalTable { name: "users" },
            ConcretePredicate::Eq(
                Column::Physical(PhysicalColumn {
                    table_name: "reviews",
                    name: "user_id",
                }),
                Column::Physical(PhysicalColumn {
                    table_name: "users",
                    name: "id",
                }),
            ),
        );

        assert_binding!(
            join.to_sql(),
            r#""reviews" LEFT JOIN "users" ON "reviews"."user_id" = "users"."id""#
        );
    }
}
