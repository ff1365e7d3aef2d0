//! WHERE methods shared by SELECT, UPDATE and DELETE builders.
//!
//! Expanded inside an `impl` block of a builder that has a `where_clause: Where`
//! field and a `build_error: Option<SphinxError>` field.

macro_rules! where_methods {
    () => {
        /// Record the first error raised while the builder is assembled.
        fn record(&mut self, result: $crate::error::SphinxResult<()>) {
            if let Err(err) = result {
                if self.build_error.is_none() {
                    self.build_error = Some(err);
                }
            }
        }

        fn push_node(&mut self, node: $crate::error::SphinxResult<$crate::expr::Expression>) {
            match node {
                Ok(expr) => {
                    self.where_clause.add_node(expr);
                }
                Err(err) => self.record(Err(err)),
            }
        }

        /// Add WHERE input of any shape [`Where::add`](crate::clause::Where::add) accepts.
        pub fn filter(mut self, input: impl Into<$crate::clause::WhereInput>) -> Self {
            let result = self.where_clause.add(input).map(|_| ());
            self.record(result);
            self
        }

        /// Compose WHERE predicates in a callback.
        pub fn filter_with<F>(mut self, f: F) -> Self
        where
            F: FnOnce(&mut $crate::clause::Where) -> $crate::error::SphinxResult<()>,
        {
            let result = self.where_clause.add_with(f).map(|_| ());
            self.record(result);
            self
        }

        /// Add WHERE: column = value
        pub fn eq(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.where_clause.add_node($crate::expr::Expression::eq(column, value));
            self
        }

        /// Add WHERE: column != value
        pub fn ne(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.where_clause.add_node($crate::expr::Expression::ne(column, value));
            self
        }

        /// Add WHERE: column > value
        pub fn gt(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.where_clause.add_node($crate::expr::Expression::gt(column, value));
            self
        }

        /// Add WHERE: column >= value
        pub fn gte(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.where_clause.add_node($crate::expr::Expression::gte(column, value));
            self
        }

        /// Add WHERE: column < value
        pub fn lt(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.where_clause.add_node($crate::expr::Expression::lt(column, value));
            self
        }

        /// Add WHERE: column <= value
        pub fn lte(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.where_clause.add_node($crate::expr::Expression::lte(column, value));
            self
        }

        /// Add WHERE: column BETWEEN low AND high
        pub fn between(
            mut self,
            column: &str,
            low: impl Into<$crate::value::Value>,
            high: impl Into<$crate::value::Value>,
        ) -> Self {
            self.where_clause
                .add_node($crate::expr::Expression::between(column, low, high));
            self
        }

        /// Add WHERE: column IN (values...)
        pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$crate::value::Value>,
        {
            self.push_node($crate::expr::Expression::in_list(column, values));
            self
        }

        /// Add WHERE: column NOT IN (values...)
        pub fn not_in<I, V>(mut self, column: &str, values: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$crate::value::Value>,
        {
            self.push_node($crate::expr::Expression::not_in(column, values));
            self
        }

        /// Add WHERE: MATCH('query')
        pub fn match_query(mut self, query: &str) -> Self {
            self.where_clause
                .add_node($crate::expr::Expression::match_query(query));
            self
        }

        /// Add a templated WHERE condition; every parameter is quoted as a value.
        pub fn raw<I, V>(mut self, template: &str, parameters: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$crate::value::Value>,
        {
            self.push_node($crate::expr::Expression::raw(template, parameters));
            self
        }

        /// Add a verbatim WHERE condition.
        pub fn literal(mut self, sql: &str) -> Self {
            self.where_clause.add_literal(sql);
            self
        }

        /// The WHERE clause built so far.
        pub fn where_clause(&self) -> &$crate::clause::Where {
            &self.where_clause
        }
    };
}

pub(crate) use where_methods;
