mod value;
pub(crate) use value::Value;

use postgres::{
    tls::MakeTlsConnect,
    types::{ToSql, Type},
    Column, Socket,
};
use riffle_core::{
    bail,
    driver::{Driver, Row},
    err, stmt, Error, Result,
};
use std::sync::Arc;
use tokio_postgres::{Client, Config};
use url::Url;

/// A Riffle driver backed by a PostgreSQL connection.
#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,
}

impl PostgreSQL {
    /// Initialize a Riffle PostgreSQL driver using an initialized connection.
    pub fn new(connection: Client) -> Self {
        Self { client: connection }
    }

    /// Connects to a PostgreSQL database using a connection string.
    ///
    /// See [`tokio_postgres::Client`] for more information.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| err!("invalid connection URL: {e}; url={url}"))?;

        if url.scheme() != "postgresql" {
            return Err(err!(
                "connection URL does not have a `postgresql` scheme; url={url}"
            ));
        }

        let host = url
            .host_str()
            .ok_or_else(|| err!("missing host in connection URL; url={url}"))?;

        if url.path().is_empty() {
            return Err(err!(
                "no database specified - missing path in connection URL; url={url}"
            ));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(url.path().trim_start_matches('/'));

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`tokio_postgres::Config`].
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("connection error: {e}");
            }
        });

        Ok(Self::new(client))
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[riffle_core::async_trait]
impl Driver for PostgreSQL {
    async fn query(&self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Row>> {
        let params = params
            .iter()
            .cloned()
            .map(Value::from)
            .collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| {
                (
                    param as &(dyn ToSql + Sync),
                    postgres_ty_for_value(&param.0),
                )
            })
            .collect::<Vec<_>>();

        let rows = self
            .client
            .query_typed(sql, &args)
            .await
            .map_err(Error::driver)?;

        let Some(first) = rows.first() else {
            return Ok(vec![]);
        };
        let columns: Arc<[String]> = first
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        let mut ret = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut values = Vec::with_capacity(columns.len());
            for (index, column) in row.columns().iter().enumerate() {
                values.push(postgres_to_riffle(index, row, column)?);
            }
            ret.push(Row::new(columns.clone(), values));
        }

        Ok(ret)
    }

    async fn exec(&self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let params = params
            .iter()
            .cloned()
            .map(Value::from)
            .collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        self.client.execute(sql, &args).await.map_err(Error::driver)
    }
}

/// Converts a PostgreSQL value within a row to a [`riffle_core::stmt::Value`].
///
/// NOTE: the inner representation of the PostgreSQL type enum is not
/// accessible, so each type is matched manually.
fn postgres_to_riffle(index: usize, row: &tokio_postgres::Row, column: &Column) -> Result<stmt::Value> {
    let value = if column.type_() == &Type::TEXT || column.type_() == &Type::VARCHAR {
        row.get::<usize, Option<String>>(index)
            .map(stmt::Value::String)
    } else if column.type_() == &Type::BOOL {
        row.get::<usize, Option<bool>>(index).map(stmt::Value::Bool)
    } else if column.type_() == &Type::INT2 {
        row.get::<usize, Option<i16>>(index)
            .map(|v| stmt::Value::I64(v.into()))
    } else if column.type_() == &Type::INT4 {
        row.get::<usize, Option<i32>>(index)
            .map(|v| stmt::Value::I64(v.into()))
    } else if column.type_() == &Type::INT8 {
        row.get::<usize, Option<i64>>(index).map(stmt::Value::I64)
    } else if column.type_() == &Type::FLOAT4 {
        row.get::<usize, Option<f32>>(index)
            .map(|v| stmt::Value::F64(v.into()))
    } else if column.type_() == &Type::FLOAT8 {
        row.get::<usize, Option<f64>>(index).map(stmt::Value::F64)
    } else {
        bail!(
            "unsupported PostgreSQL column type `{}` for column `{}`",
            column.type_(),
            column.name()
        );
    };

    Ok(value.unwrap_or(stmt::Value::Null))
}

fn postgres_ty_for_value(value: &stmt::Value) -> Type {
    match value {
        stmt::Value::Bool(_) => Type::BOOL,
        stmt::Value::I64(_) => Type::INT8,
        stmt::Value::F64(_) => Type::FLOAT8,
        stmt::Value::String(_) => Type::TEXT,
        stmt::Value::Null => Type::TEXT, // Default for NULL values
    }
}
