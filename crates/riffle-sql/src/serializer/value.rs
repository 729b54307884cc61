use super::{Formatter, Params, ToSql};

use riffle_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}
