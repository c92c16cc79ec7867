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
use super::physical_column::PhysicalColumn;
use super::physical_table::PhysicalTable;
use super::predicate::ConcretePredicate;
use super::sql_builder::SqlBuilder;

/// An update operation.
#[derive(Debug)]
pub struct Update {
    /// The table to update.
    pub table: PhysicalTable,
    /// The predicate to filter rows to update.
    pub predicate: ConcretePredicate,
    /// The columns to update and their values.
    pub column_values: Vec<(PhysicalColumn, Column)>,
    /// The columns to return.
    pub returning: Vec<Column>,
}

impl ExpressionBuilder for Update {
    /// Build the update statement for the form `UPDATE <table> SET <column = value, ...>
    /// WHERE <predicate> RETURNING <returning-columns>`. The `WHERE` is omitted if the
    /// predicate is `True` and `RETURNING` is omitted if the list of columns to return
    /// is empty.
    fn build(&self, builder: &mut SqlBuilder) {
        builder.push_str("UPDATE ");
        self.table.build(builder);

        builder.push_str(" SET ");
        builder.push_iter(
            self.column_values.iter(),
            ", ",
            |builder, (column, value)| {
                builder.without_fully_qualified_column_names(|builder| {
                    column.build(builder);
                });

                builder.push_str(" = ");

                value.build(builder);
            },
        );

        if !self.predicate.is_true() {
            builder.push_str(" WHERE ");
            self.predicate.build(builder);
        }

        if !self.returning.is_empty() {
            builder.push_str(" RETURNING ");
            builder.push_elems(&self.returning, ", ");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql_param::SqlParamContainer;

    fn users_column(name: &'static str) -> PhysicalColumn {
        PhysicalColumn {
            table_name: "users",
            name,
        }
    }

    #[test]
    fn update_returning_row() {
        let update = Update {
            table: PhysicalTable { name: "users" },
            predicate: ConcretePredicate::Eq(
                Column::Physical(users_column("id")),
                Column::Param(SqlParamContainer::i32(3)),
            ),
            column_values: vec![(
                users_column("username"),
                Column::Param(SqlParamContainer::string("rust_fan".to_owned())),
            )],
            returning: vec![
                Column::Physical(users_column("id")),
                Column::Physical(users_column("username")),
            ],
        };

        assert_binding!(
            update.to_sql(),
            r#"UPDATE "users" SET "username" = $1 WHERE "users"."id" = $2 RETURNING "users"."id", "users"."username""#,
            "rust_fan",
            3
        );
    }
}
