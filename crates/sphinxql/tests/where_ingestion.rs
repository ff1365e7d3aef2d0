use sphinxql::prelude::*;
use sphinxql::{ExprKind, MappingKey};

fn conn() -> OfflineConnection {
    OfflineConnection::new()
}

#[derive(Debug)]
struct InRadius {
    meters: u32,
}

impl Predicate for InRadius {
    fn data(&self) -> sphinxql::ExprData {
        sphinxql::ExprData::new(
            "GEODIST(lat, lon, ?, ?) < ?",
            vec![0.1.into(), 0.2.into(), self.meters.into()],
            vec![Kind::Value; 3],
        )
        .unwrap()
    }
}

#[test]
fn operator_data_has_two_placeholders_and_default_kinds() {
    let data = Expression::operator("a", ">=", 1).unwrap().data();
    assert_eq!(data.template().matches('?').count(), 2);
    assert!(data.template().contains(">="));
    assert_eq!(data.kinds(), &[Kind::Identifier, Kind::Value]);
}

#[test]
fn unknown_operator_is_rejected() {
    let err = Expression::operator("a", "LIKE", "x%").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn empty_in_list_fails_at_construction() {
    assert!(Expression::in_list("a", Vec::<i64>::new()).is_err());
    assert!(Expression::not_in("a", Vec::<i64>::new()).is_err());
}

#[test]
fn golden_operator_and_between() {
    let mut set = PredicateSet::new();
    set.operator("a", Op::Eq, 1).unwrap();
    assert_eq!(compile_clause(&set, &conn()), "`a` = 1");

    set.between("b", 1, 5);
    assert_eq!(
        compile_clause(&set, &conn()),
        "`a` = 1 AND `b` BETWEEN 1 AND 5"
    );
}

#[test]
fn match_and_literal_are_verbatim() {
    let mut set = PredicateSet::new();
    set.match_query("hello | world").literal("score > 50%");
    assert_eq!(
        compile_clause(&set, &conn()),
        "MATCH('hello | world') AND score > 50%"
    );
}

#[test]
fn escaped_user_query_in_match() {
    let query = escape_match("it's (new)");
    let mut set = PredicateSet::new();
    set.match_query(&query);
    assert_eq!(
        compile_clause(&set, &conn()),
        r"MATCH('it\'s \\(new\\)')"
    );
}

#[test]
fn mapping_rules_pick_node_kind() {
    let mut w = Where::new();
    w.add(
        Mapping::new()
            .set("a", vec![1, 2, 3])
            .set("b", 1)
            .set("c BETWEEN ? AND ?", vec![1, 5]),
    )
    .unwrap();

    let kinds: Vec<ExprKind> = w.predicates().iter().map(Expression::kind).collect();
    assert_eq!(kinds, vec![ExprKind::In, ExprKind::Operator, ExprKind::Raw]);
    assert_eq!(
        w.compile(&conn()),
        "`a` IN (1, 2, 3) AND `b` = 1 AND c BETWEEN 1 AND 5"
    );
}

#[test]
fn mapping_keys_are_reported() {
    let mapping = Mapping::new().push("x = 1").set("y", 2);
    let keys: Vec<&MappingKey> = mapping.entries().iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![&MappingKey::Position(0), &MappingKey::Name("y".to_string())]
    );
}

#[test]
fn custom_predicate_in_where() {
    let mut w = Where::new();
    w.add(Expression::custom(InRadius { meters: 500 }))
        .unwrap()
        .add(Expression::eq("open", true))
        .unwrap();
    assert_eq!(
        w.compile(&conn()),
        "GEODIST(lat, lon, 0.1, 0.2) < 500 AND `open` = 1"
    );
}

#[test]
fn where_from_another_clause_replaces() {
    let mut source = Where::new();
    source.add("a = 1").unwrap();
    let mut target = Where::new();
    target.add("b = 2").unwrap().add(source.clone()).unwrap();
    assert_eq!(target, source);
}

#[test]
fn compile_is_idempotent_across_connections() {
    let mut w = Where::new();
    w.add(Mapping::new().set("title", "50% off?").push(Expression::match_query("q")))
        .unwrap();
    let first = w.compile(&conn());
    let second = w.compile(&conn());
    assert_eq!(first, second);
    assert_eq!(first, "`title` = '50% off?' AND MATCH('q')");
}

#[test]
fn unquoted_identifiers_config() {
    let conn = OfflineConnection::with_config(ConnectionConfig::new().quote_identifiers(false));
    let mut set = PredicateSet::new();
    set.equal_to("a", "x");
    assert_eq!(compile_clause(&set, &conn), "a = 'x'");
}

#[test]
fn clauses_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
    assert_send_sync::<PredicateSet>();
    assert_send_sync::<Where>();
    assert_send_sync::<sphinxql::SelectQb>();
}
