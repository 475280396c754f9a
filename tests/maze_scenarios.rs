// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use mazeway::format::{normalize, split_definition};
use mazeway::model::{CellKind, Direction, MazeId, Position};
use mazeway::query::{available_moves, is_solvable};
use mazeway::service::{MazeService, ServiceConfig, ServiceError};
use mazeway::store::{MazeCatalog, MazeFolder};
use mazeway::validate::validate;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("mazes")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[test]
fn open_room_validates_and_reports_moves() {
    let text = read_fixture("open_room.txt");
    let lines = split_definition(&text);
    assert_eq!(lines, vec!["SOOO", "OOOO", "OOEO", "OOOO"]);

    let outcome = validate("Maze1", &lines, false);
    assert!(outcome.ok, "{:?}", outcome.reason);

    let grid = normalize(&lines).expect("normalize");
    assert_eq!(grid.find(CellKind::Entry), Some(Position::new(0, 0)));
    assert_eq!(grid.find(CellKind::Exit), Some(Position::new(2, 2)));

    let moves = available_moves(&grid, Position::new(0, 1)).expect("in bounds");
    assert!(!moves.finished);
    assert_eq!(
        moves.available_directions.as_slice(),
        &[Direction::Down, Direction::Left, Direction::Right]
    );
}

#[test]
fn walled_off_maze_is_not_solvable() {
    let text = read_fixture("walled_off.txt");
    let lines = split_definition(&text);

    let grid = normalize(&lines).expect("normalize");
    assert!(!is_solvable(&grid));

    let outcome = validate("Maze1", &lines, false);
    assert!(!outcome.ok);
    assert_eq!(outcome.reason.as_deref(), Some("Maze is not solvable."));
}

#[test]
fn maze_without_entry_is_rejected_before_solving() {
    let text = read_fixture("no_entry.txt");
    let outcome = validate("Maze1", &split_definition(&text), false);
    assert_eq!(outcome.reason.as_deref(), Some("Maze must have exactly one entry point."));
}

#[test]
fn exit_is_terminal_whatever_surrounds_it() {
    for lines in [&["SOOO", "OOOO", "OOEO", "OOOO"][..], &["SOX", "XXX", "XEX"][..]] {
        let grid = normalize(lines).expect("normalize");
        let exit = grid.find(CellKind::Exit).expect("exit");
        let moves = available_moves(&grid, exit).expect("in bounds");
        assert!(moves.finished);
        assert!(moves.available_directions.is_empty());
    }
}

#[test]
fn markers_are_case_insensitive_and_unknown_characters_are_walls() {
    let text = read_fixture("mixed_case.txt");
    let lines = split_definition(&text);
    assert!(validate("Mixed", &lines, false).ok);

    let grid = normalize(&lines).expect("normalize");
    assert_eq!(grid.to_string(), "SOOO\nXOXX\nOOEO");
}

#[tokio::test]
async fn uploads_survive_a_restart_and_keep_their_line_endings() {
    let root = std::env::temp_dir().join(format!(
        "mazeway-it-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));

    let raw = read_fixture("open_room.txt");
    {
        let service =
            MazeService::open(MazeFolder::new(&root), ServiceConfig::default()).expect("open");
        let created = service.create_maze("Maze1", &raw).await.expect("create");
        assert_eq!(created.id(), MazeId::new(1));

        let err = service
            .create_maze("Maze2", &read_fixture("walled_off.txt"))
            .await
            .expect_err("unsolvable");
        assert!(matches!(err, ServiceError::Rejected(_)));
    }

    let service =
        MazeService::open(MazeFolder::new(&root), ServiceConfig::default()).expect("reopen");
    let mazes = service.list_mazes().await;
    assert_eq!(mazes.len(), 1);
    assert_eq!(mazes[0].definition(), raw);

    let moves = service.available_moves(MazeId::new(1), 2, 2).await.expect("moves");
    assert!(moves.finished);

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn in_memory_service_rejects_duplicate_names() {
    let service = MazeService::new(MazeCatalog::new(), ServiceConfig::default());
    let raw = read_fixture("open_room.txt");

    service.create_maze("Maze1", &raw).await.expect("create");
    let err = service.create_maze(" Maze1 ", &raw).await.expect_err("duplicate");
    assert_eq!(err.to_string(), "Maze with the same name already exists.");
}
