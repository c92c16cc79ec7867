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
use super::sql_builder::SqlBuilder;

/// An insert operation for a single row.
#[derive(Debug)]
pub struct Insert {
    /// The table to insert into.
    pub table: PhysicalTable,
    /// The columns to insert into such as `(content, user_id)`
    pub columns: Vec<PhysicalColumn>,
    /// The values to insert, one per column
    pub values: Vec<Column>,
    /// The columns to return.
    pub returning: Vec<Column>,
}

impl ExpressionBuilder for Insert {
    /// Build the insert statement for the form `INSERT INTO <table> (<columns>)
    /// VALUES (<values>) RETURNING <returning-columns>`. The `RETURNING` clause
    /// is omitted if the list of columns to return is empty.
    fn build(&self, builder: &mut SqlBuilder) {
        builder.push_str("INSERT INTO ");
        self.table.build(builder);

        builder.push_str(" (");
        builder.without_fully_qualified_column_names(|builder| {
            builder.push_elems(&self.columns, ", ");
        });

        builder.push_str(") VALUES (");
        builder.push_elems(&self.values, ", ");
        builder.push(')');

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

    #[test]
    fn insert_returning_id() {
        let insert = Insert {
            table: PhysicalTable { name: "reviews" },
            columns: vec![
                PhysicalColumn {
                    table_name: "reviews",
                    name: "content",
                },
                PhysicalColumn {
                    table_name: "reviews",
                    name: "user_id",
                },
            ],
            values: vec![
                Column::Param(SqlParamContainer::string("nice".to_owned())),
                Column::Param(SqlParamContainer::i32(1)),
            ],
            returning: vec![Column::Physical(PhysicalColumn {
                table_name: "reviews",
                name: "id",
            })],
        };

        assert_binding!(
            insert.to_sql(),
            r#"INSERT INTO "reviews" ("content", "user_id") VALUES ($1, $2) RETURNING "reviews"."id""#,
            "nice",
            1
        );
    }
}
