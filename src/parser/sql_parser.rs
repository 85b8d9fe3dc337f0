use sqlparser::ast::{AlterTableOperation, Ident, ObjectName, Statement};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;

pub use sqlparser::parser::ParserError;

use crate::parser::facts::{ExtractedFacts, PolicyFact, RlsEnableFact, SourceLocation, TableFact};
use crate::parser::names::bare_relation_name;

/// A parsed statement together with the position of its first token.
#[derive(Debug, Clone)]
pub struct LocatedStatement {
    /// The parsed statement.
    pub statement: Statement,
    /// 1-based line of the first token.
    pub line: u64,
    /// 1-based column of the first token.
    pub column: u64,
}

/// Parse `PostgreSQL` DDL into statements, remembering where each one starts.
///
/// Empty statements (stray `;`) are skipped. Any syntax error aborts the
/// whole parse, including statements the dialect does not know, such as
/// `DO $$ ... $$` blocks.
pub fn parse_statements(sql: &str) -> Result<Vec<LocatedStatement>, ParserError> {
    let dialect = PostgreSqlDialect {};
    let mut parser = Parser::new(&dialect).try_with_sql(sql)?;
    let mut statements = Vec::new();
    let mut expecting_delimiter = false;

    loop {
        while parser.consume_token(&Token::SemiColon) {
            expecting_delimiter = false;
        }

        let next = parser.peek_token();
        if next.token == Token::EOF {
            break;
        }
        if expecting_delimiter {
            return Err(ParserError::ParserError(format!(
                "Expected: end of statement, found: {}",
                next.token
            )));
        }

        let start = next.span.start;
        let statement = parser.parse_statement()?;
        statements.push(LocatedStatement {
            statement,
            line: start.line,
            column: start.column,
        });
        expecting_delimiter = true;
    }

    Ok(statements)
}

/// The kind of fact a single statement contributes, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementFact {
    /// `CREATE TABLE <name>`
    Table {
        /// Bare table name.
        table_name: String,
    },
    /// `ALTER TABLE <name> ... ENABLE ROW LEVEL SECURITY ...`
    RlsEnable {
        /// Bare table name.
        table_name: String,
    },
    /// `CREATE POLICY <policy> ON <table>`
    Policy {
        /// Bare table name.
        table_name: String,
        /// Policy name.
        policy_name: String,
    },
}

/// Classify a statement into at most one fact kind.
pub fn classify_statement(statement: &Statement) -> Option<StatementFact> {
    match statement {
        // `CREATE TABLE ... AS SELECT` is not a declaration.
        Statement::CreateTable(create_table) if create_table.query.is_none() => {
            Some(StatementFact::Table {
                table_name: object_table_name(&create_table.name),
            })
        }
        Statement::AlterTable(alter_table) => alter_table
            .operations
            .iter()
            .any(|op| matches!(op, AlterTableOperation::EnableRowLevelSecurity))
            .then(|| StatementFact::RlsEnable {
                table_name: object_table_name(&alter_table.name),
            }),
        Statement::CreatePolicy(policy) => Some(StatementFact::Policy {
            table_name: object_table_name(&policy.table_name),
            policy_name: ident_name(&policy.name),
        }),
        _ => None,
    }
}

/// Extract table, RLS-enable and policy facts from one SQL source.
pub fn extract_facts(filename: &str, sql: &str) -> Result<ExtractedFacts, ParserError> {
    let mut facts = ExtractedFacts::default();

    for located in parse_statements(sql)? {
        let Some(kind) = classify_statement(&located.statement) else {
            continue;
        };
        let location = SourceLocation::new(filename, located.line, located.column);
        match kind {
            StatementFact::Table { table_name } => {
                facts.tables.push(TableFact {
                    location,
                    table_name,
                });
            }
            StatementFact::RlsEnable { table_name } => {
                facts.rls_enables.push(RlsEnableFact {
                    location,
                    table_name,
                });
            }
            StatementFact::Policy {
                table_name,
                policy_name,
            } => {
                facts.policies.push(PolicyFact {
                    location,
                    table_name,
                    policy_name,
                });
            }
        }
    }

    tracing::debug!(
        file = filename,
        tables = facts.tables.len(),
        rls_enables = facts.rls_enables.len(),
        policies = facts.policies.len(),
        "extracted facts"
    );

    Ok(facts)
}

fn object_table_name(name: &ObjectName) -> String {
    bare_relation_name(&name.to_string())
}

fn ident_name(ident: &Ident) -> String {
    if ident.quote_style.is_some() {
        ident.value.clone()
    } else {
        ident.value.to_ascii_lowercase()
    }
}
