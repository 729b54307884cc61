use postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use riffle_core::stmt::{self, Value as CoreValue};

/// Binds a [`CoreValue`] as a PostgreSQL statement parameter.
#[derive(Debug)]
pub(crate) struct Value(pub(crate) CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I64(value) => match *ty {
                Type::INT2 => {
                    let value = *value as i16;
                    value.to_sql(ty, out)
                }
                Type::INT4 => {
                    let value = *value as i32;
                    value.to_sql(ty, out)
                }
                _ => value.to_sql(ty, out),
            },
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => {
                    let value = *value as f32;
                    value.to_sql(ty, out)
                }
                _ => value.to_sql(ty, out),
            },
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::String(value) => value.to_sql(ty, out),
        }
    }

    accepts!(BOOL, INT2, INT4, INT8, FLOAT4, FLOAT8, TEXT, VARCHAR);
    to_sql_checked!();
}
