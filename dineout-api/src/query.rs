//! Parameterized `SELECT` statements over a single table.
//!
//! Conditions are kept as `(column, operator, value)` triples and rendered in
//! insertion order. Values only ever travel as bound arguments.

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
}

impl Operator {
    fn as_sql(self) -> &'static str {
        match self {
            Operator::Eq => "=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: &'static str,
    pub operator: Operator,
    pub value: SqlValue,
}

/// Rendered SQL text plus its arguments in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<SqlValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    table: &'static str,
    conditions: Vec<Condition>,
    order: Option<(&'static str, Direction)>,
}

impl SelectQuery {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            conditions: Vec::new(),
            order: None,
        }
    }

    pub fn filter_eq(mut self, column: &'static str, value: SqlValue) -> Self {
        self.conditions.push(Condition {
            column,
            operator: Operator::Eq,
            value,
        });
        self
    }

    /// Adds an equality condition only when a value is supplied.
    pub fn filter_eq_opt(self, column: &'static str, value: Option<SqlValue>) -> Self {
        match value {
            Some(value) => self.filter_eq(column, value),
            None => self,
        }
    }

    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn build(&self) -> Statement {
        let mut sql = format!("SELECT * FROM {} WHERE 1=1", self.table);
        let mut args = Vec::with_capacity(self.conditions.len());

        for condition in &self.conditions {
            sql.push_str(&format!(
                " AND {} {} ?",
                condition.column,
                condition.operator.as_sql()
            ));
            args.push(condition.value.clone());
        }

        if let Some((column, direction)) = self.order {
            sql.push_str(&format!(" ORDER BY {} {}", column, direction.as_sql()));
        }

        Statement { sql, args }
    }
}
