use charvel::{
    executor::{ExecuteOutcome, execute},
    planner::{prepare, statement::Statement},
    repl::{LoopControl, finish_session, process_command},
    storage::config::StorageConfig,
    types::{ROW_SIZE, error::DatabaseError},
    utils::mock::{TempDatabase, create_user_row},
};

fn run(table: &mut charvel::storage::table::Table, commands: &[&str]) -> String {
    let mut out: Vec<u8> = Vec::new();
    for command in commands {
        let control = process_command(command, table, &mut out).unwrap();
        assert_eq!(control, LoopControl::Continue);
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_insert_then_select_prints_all_rows_in_order() {
    let temp_db = TempDatabase::with_prefix("execute_scenario");
    let mut table = temp_db.open_table().unwrap();
    for id in 1..=5 {
        let statement = prepare(&format!("insert {id} user{id} person{id}@example.com")).unwrap();
        let outcome = execute(&statement, &mut table, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(
            outcome,
            ExecuteOutcome::Inserted {
                row_index: id as usize - 1
            }
        );
    }

    let mut out: Vec<u8> = Vec::new();
    let outcome = execute(&Statement::Select, &mut table, &mut out).unwrap();
    assert_eq!(outcome, ExecuteOutcome::Selected { row_count: 5 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "(1, user1, person1@example.com)\n\
         (2, user2, person2@example.com)\n\
         (3, user3, person3@example.com)\n\
         (4, user4, person4@example.com)\n\
         (5, user5, person5@example.com)\n"
    );
}

#[test]
fn test_select_on_empty_table_prints_nothing() {
    let temp_db = TempDatabase::with_prefix("execute_empty_select");
    let mut table = temp_db.open_table().unwrap();
    let mut out: Vec<u8> = Vec::new();
    let outcome = execute(&Statement::Select, &mut table, &mut out).unwrap();
    assert_eq!(outcome, ExecuteOutcome::Selected { row_count: 0 });
    assert!(out.is_empty());
}

#[test]
fn test_update_and_delete_leave_table_unchanged() {
    let temp_db = TempDatabase::with_prefix("execute_noop");
    let mut table = temp_db.open_table().unwrap();
    table.append(&create_user_row(1)).unwrap();

    for statement in [Statement::Update, Statement::Delete] {
        let mut out: Vec<u8> = Vec::new();
        let outcome = execute(&statement, &mut table, &mut out).unwrap();
        assert_eq!(outcome, ExecuteOutcome::Unchanged);
        assert!(out.is_empty());
    }
    assert_eq!(table.row_count(), 1);
    assert_eq!(
        table.fetch(table.address_of(0)).unwrap(),
        create_user_row(1)
    );
}

#[test]
fn test_shell_session_persists_across_reopen() {
    let temp_db = TempDatabase::with_prefix("execute_session");
    let mut table = temp_db.open_table().unwrap();
    let output = run(
        &mut table,
        &["insert 1 alice alice@example.com", "insert 2 bob bob@example.com"],
    );
    assert!(output.is_empty());

    let mut out: Vec<u8> = Vec::new();
    assert_eq!(
        process_command("$exit", &mut table, &mut out).unwrap(),
        LoopControl::Exit
    );
    table.close().unwrap();
    assert_eq!(temp_db.file_len(), 2 * ROW_SIZE as u64);

    let mut table = temp_db.open_table().unwrap();
    let output = run(&mut table, &["select"]);
    assert_eq!(
        output,
        "(1, alice, alice@example.com)\n(2, bob, bob@example.com)\n"
    );
}

#[test]
fn test_shell_reports_statement_errors_and_continues() {
    let temp_db = TempDatabase::with_prefix("execute_errors");
    let mut table = temp_db.open_table().unwrap();
    let output = run(
        &mut table,
        &["insert 1 only_two", "insert x name mail", "frobnicate", "   "],
    );
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with("Error in statement construction")));
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_shell_reports_full_table() {
    let temp_db = TempDatabase::with_prefix("execute_full")
        .with_config(StorageConfig::default().with_max_pages(1));
    let mut table = temp_db.open_table().unwrap();
    for id in 0..14 {
        table.append(&create_user_row(id)).unwrap();
    }
    let output = run(&mut table, &["insert 99 late late@example.com"]);
    assert!(output.starts_with("Error: Table is full"));
    assert_eq!(table.row_count(), 14);
}

#[test]
fn test_shell_meta_commands() {
    let temp_db = TempDatabase::with_prefix("execute_meta");
    let mut table = temp_db.open_table().unwrap();
    table.append(&create_user_row(1)).unwrap();

    let output = run(&mut table, &["$print"]);
    assert!(output.contains("ROW_SIZE: 291"));
    assert!(output.contains("PAGE_SIZE: 4096"));
    assert!(output.contains("ROWS_PER_PAGE: 14"));
    assert!(output.contains("MAX_PAGES: 100"));
    assert!(output.contains("TABLE_MAX_ROWS: 1400"));
    assert!(output.contains("ROW_COUNT: 1"));

    let output = run(&mut table, &["$bogus"]);
    assert_eq!(output, "Unrecognized command: $bogus\n");

    let mut out: Vec<u8> = Vec::new();
    assert_eq!(
        process_command("$quit", &mut table, &mut out).unwrap(),
        LoopControl::Exit
    );
}

#[test]
fn test_read_only_statements_leave_pages_clean() {
    let temp_db = TempDatabase::with_prefix("execute_read_only");
    let mut table = temp_db.open_table().unwrap();
    table.append(&create_user_row(1)).unwrap();
    table.close().unwrap();

    let mut table = temp_db.open_table().unwrap();
    for command in ["select", "update users", "delete users"] {
        let statement = prepare(command).unwrap();
        assert!(!statement.is_mutation());
        execute(&statement, &mut table, &mut Vec::<u8>::new()).unwrap();
        assert!(!table.pager().is_dirty(0));
    }

    let statement = prepare("insert 2 user2 person2@example.com").unwrap();
    assert!(statement.is_mutation());
    execute(&statement, &mut table, &mut Vec::<u8>::new()).unwrap();
    assert!(table.pager().is_dirty(0));
}

#[test]
fn test_failed_session_still_flushes_table() {
    let temp_db = TempDatabase::with_prefix("execute_failed_session");
    let mut table = temp_db.open_table().unwrap();
    run(&mut table, &["insert 1 a a@x.com", "insert 2 b b@x.com"]);

    let outcome: Result<(), DatabaseError> =
        Err(std::io::Error::other("terminal went away").into());
    match finish_session(table, outcome) {
        Err(DatabaseError::Io(err)) => assert_eq!(err.to_string(), "terminal went away"),
        other => panic!("expected the session error, got {:?}", other),
    }
    assert_eq!(temp_db.file_len(), (2 * ROW_SIZE) as u64);

    let table = temp_db.open_table().unwrap();
    assert_eq!(table.row_count(), 2);
    finish_session::<DatabaseError>(table, Ok(())).unwrap();
}
