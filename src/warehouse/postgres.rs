use tokio::spawn;
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Config as PgConfig, NoTls, SimpleQueryMessage, Statement};
use tracing::{debug, error};

use crate::config::WarehouseConfig;
use crate::models::Transaction;
use crate::types::timestamp;
use crate::warehouse::{QueryResult, Warehouse};

/// Warehouse session over the PostgreSQL wire protocol (PostgreSQL or Redshift).
///
/// Statements run in autocommit mode, so every insert is durable on its own.
pub struct PostgresWarehouse {
    client: Client,
    connection: JoinHandle<()>,
    prepared: Option<(String, Statement)>
}

impl PostgresWarehouse {
    /// Opens the connection and drives it on a background task until [`Warehouse::close`].
    pub async fn connect(config: &WarehouseConfig) -> Result<Self, tokio_postgres::Error> {
        let mut pg = PgConfig::new();
        pg.host(&config.host);
        pg.port(config.port);
        pg.user(&config.user);
        if !config.password.is_empty() {
            pg.password(&config.password);
        }
        pg.dbname(&config.database);

        let (client, connection) = pg.connect(NoTls).await?;

        let connection = spawn(async move {
            if let Err(error) = connection.await {
                error!("Warehouse connection error: {error}");
            }
        });

        debug!("Connected to warehouse {}:{}/{} as {}", config.host, config.port, config.database, config.user);

        Ok(Self {
            client,
            connection,
            prepared: None
        })
    }

    async fn prepare(&mut self, sql: &str) -> Result<Statement, tokio_postgres::Error> {
        if let Some((text, statement)) = &self.prepared {
            if text == sql {
                return Ok(statement.clone());
            }
        }

        let statement = self.client.prepare(sql).await?;
        self.prepared = Some((sql.to_string(), statement.clone()));

        Ok(statement)
    }
}

impl Warehouse for PostgresWarehouse {
    type Error = tokio_postgres::Error;

    async fn apply_schema(&mut self, ddl: &str) -> Result<(), Self::Error> {
        self.client.batch_execute(ddl).await
    }

    async fn insert(&mut self, statement: &str, row: &Transaction) -> Result<u64, Self::Error> {
        let statement = self.prepare(statement).await?;
        let transaction_date = row.transaction_date.as_ref().map(timestamp::format);

        //NOTE: Order must follow schema::COLUMNS
        let params: [&(dyn ToSql + Sync); 10] = [
            &row.transaction_id,
            &transaction_date,
            &row.venue,
            &row.event_name,
            &row.ticket_type,
            &row.quantity,
            &row.price,
            &row.revenue,
            &row.customer_id,
            &row.payment_method
        ];

        self.client.execute(&statement, &params).await
    }

    async fn query(&mut self, statement: &str) -> Result<QueryResult, Self::Error> {
        let mut result = QueryResult::default();

        for message in self.client.simple_query(statement).await? {
            if let SimpleQueryMessage::Row(row) = message {
                if result.columns.is_empty() {
                    result.columns = row.columns().iter().map(|column| column.name().to_string()).collect();
                }

                result.rows.push((0..row.len()).map(|index| row.get(index).map(str::to_string)).collect());
            }
        }

        Ok(result)
    }

    async fn close(self) {
        let Self { client, connection, prepared } = self;
        drop(prepared);
        drop(client);

        if let Err(error) = connection.await {
            error!("Warehouse connection task did not shut down gracefully: {error}");
        }

        debug!("Closed warehouse connection");
    }
}
