//! Tests for the qb module.

use crate::clause::Mapping;
use crate::connection::OfflineConnection;
use crate::expr::Expression;
use crate::qb::{Direction, OptionValue, SqlQb, StatementKind, delete, insert, replace, select, update};
use crate::value::{TypeTag, Value};

fn conn() -> OfflineConnection {
    OfflineConnection::new()
}

// ==================== SELECT ====================

#[test]
fn test_select_basic() {
    let sql = select("products").to_sql(&conn()).unwrap();
    assert_eq!(sql, "SELECT * FROM `products`");
}

#[test]
fn test_select_with_conditions() {
    let sql = select("products")
        .columns(&["id", "weight() AS w"])
        .match_query("wireless")
        .eq("category_id", 3)
        .gt("price", 9.5)
        .limit(10)
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT id, weight() AS w FROM `products` WHERE MATCH('wireless') AND `category_id` = 3 AND `price` > 9.5 LIMIT 10"
    );
}

#[test]
fn test_select_full_clause_order() {
    let sql = select("products")
        .from("products_delta")
        .eq("enabled", true)
        .group_by("brand_id")
        .within_group_order_by("price", Direction::Asc)
        .having("COUNT(*) > 1")
        .order_by("brand_id", Direction::Desc)
        .order_by_raw("weight() DESC")
        .limit(20)
        .offset(40)
        .option("ranker", OptionValue::raw("bm25"))
        .option("max_matches", 1000)
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `products`, `products_delta` WHERE `enabled` = 1 \
         GROUP BY `brand_id` WITHIN GROUP ORDER BY `price` ASC HAVING COUNT(*) > 1 \
         ORDER BY `brand_id` DESC, weight() DESC LIMIT 40, 20 \
         OPTION ranker = bm25, max_matches = 1000"
    );
}

#[test]
fn test_select_where_mapping_and_callback() {
    let sql = select("idx")
        .filter(Mapping::new().set("tag", vec![1, 2]).push("a > 1"))
        .filter_with(|w| {
            w.add(Expression::lte("b", 5))?;
            Ok(())
        })
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `idx` WHERE `tag` IN (1, 2) AND a > 1 AND `b` <= 5"
    );
}

#[test]
fn test_select_raw_template() {
    let sql = select("idx")
        .raw("GEODIST(lat, lon, ?, ?) < ?", [Value::from(0.5), 1.25.into(), 1000.into()])
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `idx` WHERE GEODIST(lat, lon, 0.5, 1.25) < 1000"
    );
}

#[test]
fn test_select_stores_first_error() {
    let qb = select("idx")
        .in_list("a", Vec::<i32>::new())
        .filter(Mapping::new().push(1))
        .eq("b", 1);
    let err = qb.to_sql(&conn()).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("IN list for 'a' cannot be empty"));
}

#[test]
fn test_select_offset_requires_limit() {
    let err = select("idx").offset(10).to_sql(&conn()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_select_within_group_requires_group_by() {
    let err = select("idx")
        .within_group_order_by("price", Direction::Desc)
        .to_sql(&conn())
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_cloned_builder_where_is_independent() {
    let base = select("idx").eq("a", 1);
    let narrowed = base.clone().eq("b", 2);

    assert_eq!(
        base.to_sql(&conn()).unwrap(),
        "SELECT * FROM `idx` WHERE `a` = 1"
    );
    assert_eq!(
        narrowed.to_sql(&conn()).unwrap(),
        "SELECT * FROM `idx` WHERE `a` = 1 AND `b` = 2"
    );
    assert_eq!(base.where_clause().len(), 1);
}

// ==================== INSERT / REPLACE ====================

#[test]
fn test_insert_basic() {
    let sql = insert("products")
        .set("id", 1)
        .set("title", "it's")
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        r"INSERT INTO `products` (`id`, `title`) VALUES (1, 'it\'s')"
    );
}

#[test]
fn test_replace_multi_row_with_type_hints() {
    let qb = replace("products")
        .columns(&["id", "tags", "price"])
        .values([Value::from(1), vec![3, 7].into(), "10".into()])
        .values([Value::from(2), Value::Array(vec![]), 2.5.into()])
        .type_hint("tags", TypeTag::Mva)
        .type_hint("price", TypeTag::Float);
    assert_eq!(qb.statement_kind(), StatementKind::Replace);
    assert_eq!(
        qb.to_sql(&conn()).unwrap(),
        "REPLACE INTO `products` (`id`, `tags`, `price`) VALUES (1, (3, 7), 10), (2, (), 2.5)"
    );
}

#[test]
fn test_insert_json_attribute() {
    let sql = insert("docs")
        .set("id", 5)
        .set_json("meta", &serde_json::json!({"k": "v"}))
        .unwrap()
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        r#"INSERT INTO `docs` (`id`, `meta`) VALUES (5, '{\"k\":\"v\"}')"#
    );
}

#[test]
fn test_insert_rejects_ragged_rows() {
    let err = insert("idx")
        .columns(&["a", "b"])
        .values([1, 2])
        .values([3])
        .to_sql(&conn())
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn test_insert_rejects_empty() {
    assert!(insert("idx").to_sql(&conn()).unwrap_err().is_validation());
    assert!(
        insert("idx")
            .columns(&["a"])
            .to_sql(&conn())
            .unwrap_err()
            .is_validation()
    );
}

#[test]
fn test_insert_set_after_multi_row_fails() {
    let err = insert("idx")
        .columns(&["a"])
        .values([1])
        .values([2])
        .set("b", 3)
        .to_sql(&conn())
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

// ==================== UPDATE ====================

#[test]
fn test_update_basic() {
    let sql = update("products")
        .set("price", 99.5)
        .set_typed("tags", vec![1, 2], TypeTag::Mva)
        .eq("id", 1)
        .option("strict", 1)
        .to_sql(&conn())
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE `products` SET `price` = 99.5, `tags` = (1, 2) WHERE `id` = 1 OPTION strict = 1"
    );
}

#[test]
fn test_update_requires_set_and_where() {
    let err = update("idx").eq("id", 1).to_sql(&conn()).unwrap_err();
    assert!(err.is_validation());
    let err = update("idx").set("a", 1).to_sql(&conn()).unwrap_err();
    assert!(err.is_validation());
}

// ==================== DELETE ====================

#[test]
fn test_delete_basic() {
    let sql = delete("products")
        .in_list("id", [1, 2, 3])
        .to_sql(&conn())
        .unwrap();
    assert_eq!(sql, "DELETE FROM `products` WHERE `id` IN (1, 2, 3)");
}

#[test]
fn test_delete_requires_where() {
    let err = delete("products").to_sql(&conn()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_delete_empty_not_in_reported() {
    let err = delete("products")
        .not_in("id", Vec::<u64>::new())
        .to_sql(&conn())
        .unwrap_err();
    assert!(err.is_invalid_argument());
}
