use querybob::{BuildError, Dialect, Target, Value, delete, insert, select, update};

fn four_field_select() -> querybob::Builder {
    select("table1")
        .columns(&["field1", "field2", "field3", "field4"])
        .into_targets(["d.field1", "d.field2", "d.field3", "d.field4"])
}

const FOUR_FIELDS: &str = "SELECT table1.field1,table1.field2,table1.field3,table1.field4 FROM table1";

#[test]
fn select_without_criteria() {
    let qb = four_field_select();
    assert_eq!(qb.generate().unwrap(), FOUR_FIELDS);
    assert_eq!(
        qb.targets(),
        &[
            Target::new("d.field1"),
            Target::new("d.field2"),
            Target::new("d.field3"),
            Target::new("d.field4"),
        ]
    );
}

#[test]
fn select_column_target_mismatch() {
    let qb = select("table1")
        .columns(&["field1", "field2", "field3"])
        .into_targets(["a", "b", "c", "d"]);
    let err = qb.generate().unwrap_err();
    assert_eq!(err, BuildError::ColumnValueMismatch { columns: 3, values: 4 });
    assert!(qb.build().is_err());
}

#[test]
fn select_with_order() {
    let sql = four_field_select()
        .order_by("table1.field1")
        .order_by_desc("table1.field2")
        .generate()
        .unwrap();
    assert_eq!(
        sql,
        format!("{FOUR_FIELDS} ORDER BY table1.field1 ASC,table1.field2 DESC")
    );
}

#[test]
fn select_with_single_criterion() {
    let qb = four_field_select().filter("table1.field1", "=", ["value1"]);
    assert_eq!(
        qb.generate().unwrap(),
        format!("{FOUR_FIELDS} WHERE table1.field1=?")
    );
    assert_eq!(qb.criteria(), vec![Value::from("value1")]);
}

#[test]
fn select_with_limit() {
    let sql = four_field_select()
        .filter("table1.field1", "=", ["value1"])
        .limit(10, 0)
        .generate()
        .unwrap();
    assert_eq!(sql, format!("{FOUR_FIELDS} WHERE table1.field1=? LIMIT 10"));
}

#[test]
fn select_with_limit_and_offset() {
    let sql = four_field_select()
        .filter("table1.field1", "=", ["value1"])
        .limit(10, 50)
        .generate()
        .unwrap();
    assert_eq!(sql, format!("{FOUR_FIELDS} WHERE table1.field1=? LIMIT 10,50"));
}

#[test]
fn offset_alone_emits_nothing() {
    let sql = four_field_select().limit(0, 50).generate().unwrap();
    assert_eq!(sql, FOUR_FIELDS);
}

#[test]
fn select_with_and_or() {
    let and = four_field_select()
        .filter("table1.field1", "=", ["value1"])
        .filter("table1.field2", "=", ["value2"]);
    assert_eq!(
        and.generate().unwrap(),
        format!("{FOUR_FIELDS} WHERE table1.field1=? AND table1.field2=?")
    );
    assert_eq!(and.criteria(), vec![Value::from("value1"), Value::from("value2")]);

    let or = four_field_select()
        .filter("table1.field1", "=", ["value1"])
        .or_filter("table1.field2", "=", ["value2"]);
    assert_eq!(
        or.generate().unwrap(),
        format!("{FOUR_FIELDS} WHERE table1.field1=? OR table1.field2=?")
    );
}

#[test]
fn invalid_operator_is_rejected() {
    let err = four_field_select()
        .filter("table1.field1", "=", ["value1"])
        .filter("table1.field2", "ins", [1, 2, 3])
        .generate()
        .unwrap_err();
    assert_eq!(err, BuildError::InvalidOperator("INS".to_string()));
}

#[test]
fn first_criterion_or_is_rejected() {
    let err = four_field_select()
        .or_filter("table1.field1", "=", ["value1"])
        .generate()
        .unwrap_err();
    assert_eq!(err, BuildError::FirstCriterionIsOr);
}

#[test]
fn in_operator_one_placeholder_per_value() {
    let qb = four_field_select().filter("table1.field2", "in", [1, 2, 3]);
    assert_eq!(
        qb.generate().unwrap(),
        format!("{FOUR_FIELDS} WHERE table1.field2 IN (?,?,?)")
    );
    assert_eq!(
        qb.for_postgres().generate().unwrap(),
        format!("{FOUR_FIELDS} WHERE table1.field2 IN ($1,$2,$3)")
    );
}

#[test]
fn like_operator() {
    let sql = four_field_select()
        .filter("table1.field2", "like", ["test"])
        .generate()
        .unwrap();
    assert_eq!(sql, format!("{FOUR_FIELDS} WHERE table1.field2 LIKE ?"));
}

#[test]
fn select_with_joins() {
    let qb = select("table1")
        .columns(&["field1", "field2", "field3", "field4", "table2.field5", "table3.field6"])
        .into_targets(["f1", "f2", "f3", "f4", "f5", "f6"])
        .join("LEFT", "table2", "table2.table1_id", "table1.id")
        .join("LEFT", "table3", "table3.table1_id", "table1.id")
        .filter("table1.field1", "=", [Value::from("value1")])
        .filter("table1.field2", "IN", [1, 2, 3, 4])
        .filter("table1.field3", "BETWEEN", [1, 10]);
    assert_eq!(
        qb.generate().unwrap(),
        "SELECT table1.field1,table1.field2,table1.field3,table1.field4,table2.field5,table3.field6 \
         FROM table1 LEFT JOIN table2 ON table2.table1_id=table1.id \
         LEFT JOIN table3 ON table3.table1_id=table1.id \
         WHERE table1.field1=? AND table1.field2 IN (?,?,?,?) AND table1.field3 BETWEEN ? AND ?"
    );
    let expected: Vec<Value> = vec![
        "value1".into(),
        1.into(),
        2.into(),
        3.into(),
        4.into(),
        1.into(),
        10.into(),
    ];
    assert_eq!(qb.criteria(), expected);
}

#[test]
fn delete_statement() {
    let qb = delete("table1").filter("table1.field1", "=", ["value1"]);
    assert_eq!(qb.generate().unwrap(), "DELETE FROM table1 WHERE table1.field1=?");
    assert_eq!(qb.criteria(), vec![Value::from("value1")]);
}

#[test]
fn delete_with_bang_equals_is_rejected() {
    let err = delete("table1")
        .filter("table1.field1", "!=", ["value1"])
        .generate()
        .unwrap_err();
    assert_eq!(err, BuildError::InvalidOperator("!=".to_string()));
}

fn four_values() -> [Value; 4] {
    ["value1".into(), 2.into(), 5.into(), "value4".into()]
}

#[test]
fn update_statement() {
    let qb = update("table1")
        .set(&["field1", "field2", "field3", "field4"])
        .to(four_values())
        .filter("table1.id", "=", [10]);
    assert_eq!(
        qb.generate().unwrap(),
        "UPDATE table1 SET field1=?,field2=?,field3=?,field4=? WHERE table1.id=?"
    );
    assert_eq!(qb.values(), &four_values());
    assert_eq!(qb.criteria(), vec![Value::from(10)]);
}

#[test]
fn update_errors() {
    let err = update("table1")
        .set(&["field1", "field2", "field3", "field4"])
        .to(four_values())
        .filter("table1.id", "!=", [10])
        .generate()
        .unwrap_err();
    assert!(err.is_invalid_operator());

    let err = update("table1")
        .set(&["field1", "field2", "field3", "field4"])
        .to(["value1", "2", "5"])
        .filter("table1.id", "=", [10])
        .generate()
        .unwrap_err();
    assert_eq!(err, BuildError::ColumnValueMismatch { columns: 4, values: 3 });
}

#[test]
fn insert_statement_per_dialect() {
    let base = insert("table1")
        .set(&["field1", "field2", "field3", "field4"])
        .to(four_values());

    let expected = [
        (Dialect::Generic, "(?,?,?,?)"),
        (Dialect::MySql, "(?,?,?,?)"),
        (Dialect::Sqlite, "(?,?,?,?)"),
        (Dialect::Postgres, "($1,$2,$3,$4)"),
        (Dialect::Oracle, "(:1,:2,:3,:4)"),
    ];
    for (dialect, placeholders) in expected {
        let built = base.clone().dialect(dialect).build().unwrap();
        assert_eq!(
            built.sql(),
            format!("INSERT INTO table1 (field1,field2,field3,field4) VALUES {placeholders}"),
            "{dialect}"
        );
        assert_eq!(built.params(), &four_values());
    }
}

#[test]
fn insert_with_filter_binds_only_values() {
    let built = insert("table1")
        .for_postgres()
        .set(&["field1"])
        .to(["value1"])
        .filter("table1.id", "=", [10])
        .build()
        .unwrap();
    assert_eq!(built.sql(), "INSERT INTO table1 (field1) VALUES ($1)");
    assert_eq!(built.params(), &[Value::from("value1")]);
}

#[test]
fn insert_with_returning_on_postgres() {
    let built = insert("table1")
        .for_postgres()
        .set(&["field1", "field2", "field3", "field4"])
        .to(four_values())
        .returning(&["id", "field1"])
        .returning_into(["id", "field1"])
        .build()
        .unwrap();
    assert_eq!(
        built.sql(),
        "INSERT INTO table1 (field1,field2,field3,field4) VALUES ($1,$2,$3,$4) \
         RETURNING table1.id,table1.field1"
    );
    assert_eq!(built.targets(), &[Target::new("id"), Target::new("field1")]);
}

#[test]
fn returning_needs_a_capable_dialect() {
    for dialect in [Dialect::Generic, Dialect::MySql, Dialect::Sqlite] {
        // Fails on the dialect even when the arity is also wrong.
        let err = update("table1")
            .dialect(dialect)
            .set(&["field1"])
            .to([1])
            .returning(&["id", "field1"])
            .returning_into(["id"])
            .generate()
            .unwrap_err();
        assert_eq!(err, BuildError::UnsupportedReturning(dialect));
    }

    let sql = update("table1")
        .for_oracle()
        .set(&["field1"])
        .to([1])
        .filter("table1.id", "=", [3])
        .returning(&["id"])
        .returning_into(["id"])
        .generate()
        .unwrap();
    assert_eq!(sql, "UPDATE table1 SET field1=:1 WHERE table1.id=:2 RETURNING table1.id");
}

#[test]
fn returning_arity_is_checked() {
    let err = delete("table1")
        .for_postgres()
        .filter("table1.id", "=", [1])
        .returning(&["id", "field1"])
        .returning_into(["id"])
        .generate()
        .unwrap_err();
    assert_eq!(err, BuildError::ColumnValueMismatch { columns: 2, values: 1 });
}

#[test]
fn insert_column_value_mismatch() {
    let err = insert("table1")
        .set(&["field1", "field2", "field3", "field4"])
        .to(["value1", "2", "5"])
        .generate()
        .unwrap_err();
    assert_eq!(err.to_string(), "columns count (4) must be equal to values count (3)");
}
