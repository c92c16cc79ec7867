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
use super::physical_table::PhysicalTable;
use super::predicate::ConcretePredicate;
use super::sql_builder::SqlBuilder;

/// A delete operation.
#[derive(Debug)]
pub struct Delete {
    /// The table to delete from.
    pub table: PhysicalTable,
    /// The predicate to filter rows by.
    pub predicate: ConcretePredicate,
    /// The columns to return.
    pub returning: Vec<Column>,
}

impl ExpressionBuilder for Delete {
    /// Build a delete operation for the `DELETE FROM <table> WHERE <predicate>
    /// RETURNING <returning>`. The `WHERE` clause is omitted if the predicate is
    /// `true` and the `RETURNING` clause is omitted if the list of columns to
    /// return is empty.
    fn build(&self, builder: &mut SqlBuilder) {
        builder.push_str("DELETE FROM ");
        self.table.build(builder);

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
    use crate::sql::physical_column::PhysicalColumn;
    use crate::sql::sql_param::SqlParamContainer;

    #[test]
    fn delete_by_id() {
        let delete = Delete {
            table: PhysicalTable { name: "products" },
            predicate: ConcretePredicate::Eq(
                Column::Physical(PhysicalColumn {
                    table_name: "products",
                    name: "id",
                }),
                Column::Param(SqlParamContainer::i32(42)),
            ),
            returning: vec![Column::Physical(PhysicalColumn {
                table_name: "products",
                name: "id",
            })],
        };

        assert_binding!(
            delete.to_sql(),
            r#"DELETE FROM "products" WHERE "products"."id" = $1 RETURNING "products"."id""#,
            42
        );
    }
}
