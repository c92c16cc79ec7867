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
use super::limit::Limit;
use super::offset::Offset;
use super::predicate::ConcretePredicate;
use super::sql_builder::SqlBuilder;
use super::table::Table;

/// A select statement
#[derive(Debug)]
pub struct Select {
    /// The table (or join) to select from
    pub table: Table,
    /// The columns to select
    pub columns: Vec<Column>,
    /// The predicate to filter the rows
    pub predicate: ConcretePredicate,
    /// The offset clause
    pub offset: Option<Offset>,
    /// The limit clause
    pub limit: Option<Limit>,
}

impl ExpressionBuilder for Select {
    fn build(&self, builder: &mut SqlBuilder) {
        builder.push_str("SELECT ");
        builder.push_elems(&self.columns, ", ");

        builder.push_str(" FROM ");
        self.table.build(builder);

        // Avoid correct, but inelegant "WHERE TRUE" clause
        if !self.predicate.is_true() {
            builder.push_str(" WHERE ");
            self.predicate.build(builder);
        }
        if let Some(offset) = &self.offset {
            builder.push_space();
            offset.build(builder);
        }
        if let Some(limit) = &self.limit {
            builder.push_space();
            limit.build(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::physical_column::PhysicalColumn;
    use crate::sql::physical_table::PhysicalTable;
    use crate::sql::sql_param::SqlParamContainer;

    const USERS: PhysicalTable = PhysicalTable { name: "users" };

    fn users_column(name: &'static str) -> Column {
        Column::Physical(PhysicalColumn {
            table_name: "users",
            name,
        })
    }

    #[test]
    fn predicated_select() {
        let select = Select {
            table: Table::Physical(USERS),
            columns: vec![users_column("id"), users_column("username")],
            predicate: ConcretePredicate::Eq(
                users_column("id"),
                Column::Param(SqlParamContainer::i32(7)),
            ),
            offset: None,
            limit: None,
        };

        assert_binding!(
            select.to_sql(),
            r#"SELECT "users"."id", "users"."username" FROM "users" WHERE "users"."id" = $1"#,
            7
        );
    }

    #[test]
    fn paginated_select() {
        let select = Select {
            table: Table::Physical(USERS),
            columns: vec![users_column("username")],
            predicate: ConcretePredicate::True,
            offset: Some(Offset(0)),
            limit: Some(Limit(20)),
        };

        assert_binding!(
            select.to_sql(),
            r#"SELECT "users"."username" FROM "users" OFFSET $1 LIMIT $2"#,
            0i64,
            20i64
        );
    }
}
