use riffle::{
    async_trait,
    stmt::{Direction, Expr, Select, Update, Value},
    Db, Driver, FromRow, ListOption, OffsetPagination, Result, Row,
};

use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Stand-in execution engine: records every round-trip and replays scripted
/// responses in order.
#[derive(Debug, Default, Clone)]
struct RecordingDriver {
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    responses: Mutex<VecDeque<Vec<Row>>>,
    affected: Mutex<u64>,
}

impl RecordingDriver {
    fn new(responses: impl IntoIterator<Item = Vec<Row>>) -> Self {
        let driver = Self::default();
        *driver.state.responses.lock().unwrap() = responses.into_iter().collect();
        driver
    }

    fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.state.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        self.state
            .calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        match self.state.responses.lock().unwrap().pop_front() {
            Some(rows) => Ok(rows),
            None => Err(riffle_core::err!("no scripted response")),
        }
    }

    async fn exec(&self, sql: &str, params: &[Value]) -> Result<u64> {
        self.state
            .calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        Ok(*self.state.affected.lock().unwrap())
    }
}

fn count_row(total: i64) -> Vec<Row> {
    vec![Row::new(
        vec!["count".to_string()].into(),
        vec![Value::I64(total)],
    )]
}

fn user_rows(names: &[&str]) -> Vec<Row> {
    let columns: Arc<[String]> = vec!["id".to_string(), "name".to_string()].into();
    names
        .iter()
        .enumerate()
        .map(|(id, name)| {
            Row::new(
                columns.clone(),
                vec![Value::I64(id as i64 + 1), Value::String(name.to_string())],
            )
        })
        .collect()
}

#[derive(Debug, PartialEq)]
struct User {
    id: i64,
    name: String,
}

impl FromRow for User {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(User {
            id: row.get("id")?.to_i64()?,
            name: row.get("name")?.to_string()?,
        })
    }
}

#[tokio::test]
async fn empty_result_set_skips_the_data_query() {
    let driver = RecordingDriver::new([count_row(0)]);
    let db = Db::new(driver.clone());

    let page = db
        .list::<User>(Select::new("users").column("*"), vec![])
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.count_records, 0);
    assert_eq!(page.pagination.count_pages, 0);

    let calls = driver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "SELECT COUNT(*) FROM users;");
}

#[tokio::test]
async fn first_page_of_forty_five_records() {
    let driver = RecordingDriver::new([count_row(45), user_rows(&["ada", "grace"])]);
    let db = Db::new(driver.clone());

    let page = db
        .list::<User>(Select::new("users").column("*"), vec![])
        .await
        .unwrap();

    assert_eq!(page.pagination.count_records, 45);
    assert_eq!(page.pagination.count_pages, 3);
    assert_eq!(page.pagination.current_page(), 1);
    assert_eq!(
        page.items,
        vec![
            User {
                id: 1,
                name: "ada".to_string()
            },
            User {
                id: 2,
                name: "grace".to_string()
            },
        ]
    );

    let calls = driver.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].0, "SELECT * FROM users LIMIT 20 OFFSET 0;");
}

#[tokio::test]
async fn out_of_range_page_short_circuits() {
    let driver = RecordingDriver::new([count_row(45)]);
    let db = Db::new(driver.clone());

    let mut pagination = OffsetPagination::new(20);
    pagination.page = 10;

    let page = db
        .list::<User>(
            Select::new("users").column("*"),
            vec![ListOption::paginate(&pagination)],
        )
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.current_page(), 10);
    assert_eq!(page.pagination.count_pages, 3);
    assert_eq!(driver.calls().len(), 1);
}

#[tokio::test]
async fn two_paging_options_fail_before_any_round_trip() {
    let driver = RecordingDriver::new([count_row(45)]);
    let db = Db::new(driver.clone());

    let err = db
        .list::<User>(
            Select::new("users").column("*"),
            vec![
                ListOption::paginate(&OffsetPagination::new(20)),
                ListOption::paginate(&OffsetPagination::new(50)),
            ],
        )
        .await
        .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(driver.calls().len(), 0);
}

#[tokio::test]
async fn filters_count_while_sorting_and_paging_do_not() {
    let driver = RecordingDriver::new([count_row(3)]);
    let db = Db::new(driver.clone());

    // Page 2 of a 3-record result short-circuits after the count, so the
    // only recorded round-trip is the count query: filtered, unsorted,
    // unpaged.
    let mut pagination = OffsetPagination::new(10);
    pagination.page = 2;

    let page = db
        .list::<User>(
            Select::new("users").column("*"),
            vec![
                ListOption::sort_by("name", Direction::Desc),
                ListOption::with("status", ["active", "invited"]),
                ListOption::paginate(&pagination),
            ],
        )
        .await
        .unwrap();

    assert!(page.items.is_empty());
    let calls = driver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        "SELECT COUNT(*) FROM users WHERE (status = $1 OR status = $2);"
    );
    assert_eq!(
        calls[0].1,
        vec![
            Value::String("active".to_string()),
            Value::String("invited".to_string())
        ]
    );
}

#[tokio::test]
async fn sorting_and_paging_apply_only_to_the_data_query() {
    let driver = RecordingDriver::new([count_row(45), user_rows(&["ada"])]);
    let db = Db::new(driver.clone());

    let mut pagination = OffsetPagination::new(10);
    pagination.page = 3;

    db.list::<User>(
        Select::new("users").column("*"),
        vec![
            ListOption::sort_by("name", Direction::Desc),
            ListOption::with("status", ["active"]),
            ListOption::paginate(&pagination),
        ],
    )
    .await
    .unwrap();

    let calls = driver.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].0,
        "SELECT COUNT(*) FROM users WHERE status = $1;"
    );
    assert_eq!(
        calls[1].0,
        "SELECT * FROM users WHERE status = $1 ORDER BY name DESC LIMIT 10 OFFSET 20;"
    );
    // Both queries bind the same filter parameters.
    assert_eq!(calls[0].1, calls[1].1);
}

#[tokio::test]
async fn count_failure_is_tagged_with_the_phase() {
    // No scripted responses at all: the count round-trip itself fails.
    let driver = RecordingDriver::new([]);
    let db = Db::new(driver.clone());

    let err = db
        .list::<User>(Select::new("users").column("*"), vec![])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "count records: no scripted response");
}

#[tokio::test]
async fn assembly_failure_is_tagged_before_any_round_trip() {
    let driver = RecordingDriver::new([count_row(1)]);
    let db = Db::new(driver.clone());

    // No projected columns: the count statement cannot be assembled.
    let err = db
        .list::<User>(Select::new("users"), vec![])
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("assemble count query: "));
    assert_eq!(driver.calls().len(), 0);
}

#[tokio::test]
async fn get_converts_not_found_into_none() {
    let driver = RecordingDriver::new([vec![], user_rows(&["ada"])]);
    let db = Db::new(driver.clone());

    let missing: Option<User> = db
        .get(Select::new("users").column("*").and_where(Expr::eq("id", 1)))
        .await
        .unwrap();
    assert_eq!(missing, None);

    let found: Option<User> = db
        .get(Select::new("users").column("*").and_where(Expr::eq("id", 1)))
        .await
        .unwrap();
    assert_eq!(
        found,
        Some(User {
            id: 1,
            name: "ada".to_string()
        })
    );
}

#[tokio::test]
async fn fetch_one_reports_the_missing_record() {
    let driver = RecordingDriver::new([vec![]]);
    let db = Db::new(driver.clone());

    let err = db
        .fetch_one::<User>(Select::new("users").column("*"))
        .await
        .unwrap_err();

    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: table=users");
}

#[tokio::test]
async fn exec_renders_writes_and_returns_affected_rows() {
    let driver = RecordingDriver::default();
    *driver.state.affected.lock().unwrap() = 3;
    let db = Db::new(driver.clone());

    let affected = db
        .exec(
            Update::new("users")
                .set("status", "inactive")
                .and_where(Expr::eq("status", "invited")),
        )
        .await
        .unwrap();

    assert_eq!(affected, 3);
    let calls = driver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "UPDATE users SET status = $1 WHERE status = $2;");
}
