//! デバウンス＋絞り込みの結合テスト
//!
//! 仮想時刻で入力を再現し、絞り込みが最後の入力で1回だけ走ることを検証

use inventario_ui::{apply_filter, Debouncer, ManualScheduler, MemoryRow, Query, UiConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

type Table = Rc<RefCell<Vec<MemoryRow>>>;

fn table() -> Table {
    Rc::new(RefCell::new(vec![
        MemoryRow::new(["00000012", "Ron Añejo", "12"]),
        MemoryRow::new(["7709876543", "Aguardiente Antioqueño", "30"]),
    ]))
}

/// 入力欄と同じ形でデバウンサーを組み立てる
fn wire(
    scheduler: &ManualScheduler,
    wait: Duration,
    table: &Table,
) -> (Debouncer<String, ManualScheduler>, Rc<RefCell<Vec<(Duration, String)>>>) {
    let runs = Rc::new(RefCell::new(Vec::new()));
    let clock = scheduler.clone();
    let rows = Rc::clone(table);
    let log = Rc::clone(&runs);
    let debouncer = Debouncer::new(scheduler.clone(), wait, move |raw: String| {
        apply_filter(rows.borrow_mut().iter_mut(), &Query::new(&raw));
        log.borrow_mut().push((clock.now(), raw));
    });
    (debouncer, runs)
}

/// t=0,50,100ms の入力 → t=350ms に1回だけ、最後の値で実行
#[test]
fn test_keystrokes_coalesce() {
    let config = UiConfig::default();
    let scheduler = ManualScheduler::new();
    let rows = table();
    let (search, runs) = wire(&scheduler, config.search_debounce(), &rows);

    search.schedule("r".into());
    scheduler.advance(ms(50));
    search.schedule("ro".into());
    scheduler.advance(ms(50));
    search.schedule("agu".into());

    scheduler.advance(ms(1000));

    assert_eq!(*runs.borrow(), vec![(ms(350), "agu".to_string())]);
    let rows = rows.borrow();
    assert!(!rows[0].visible);
    assert!(rows[1].visible);
}

/// 待機中はテーブルが変わらない
#[test]
fn test_table_untouched_until_quiet() {
    let scheduler = ManualScheduler::new();
    let rows = table();
    let (scanner, runs) = wire(&scheduler, UiConfig::default().scanner_debounce(), &rows);

    scanner.schedule("7709".into());
    scheduler.advance(ms(149));
    assert!(runs.borrow().is_empty());
    assert!(rows.borrow().iter().all(|r| r.visible));

    scheduler.advance(ms(1));
    assert_eq!(runs.borrow().len(), 1);
    assert!(!rows.borrow()[0].visible);
}

/// 検索欄とスキャナー欄は独立して動く（後に完了した方が表示を決める）
#[test]
fn test_two_inputs_share_table() {
    let config = UiConfig::default();
    let scheduler = ManualScheduler::new();
    let rows = table();
    let (search, search_runs) = wire(&scheduler, config.search_debounce(), &rows);
    let (scanner, scanner_runs) = wire(&scheduler, config.scanner_debounce(), &rows);

    search.schedule("ron".into());
    scanner.schedule("7709".into());

    scheduler.advance(ms(150));
    assert_eq!(scanner_runs.borrow().len(), 1);
    assert!(rows.borrow()[1].visible);
    assert!(!rows.borrow()[0].visible);

    scheduler.advance(ms(100));
    assert_eq!(search_runs.borrow().len(), 1);
    assert!(rows.borrow()[0].visible);
    assert!(!rows.borrow()[1].visible);
}
