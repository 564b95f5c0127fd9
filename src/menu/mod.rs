//! Interactive menu controller.
//!
//! A single-threaded loop over stdin/stdout: show the top menu,
//! dispatch one of the eleven operations, then ask whether to continue.
//! Export and storage failures are reported and the loop keeps running;
//! only the exit option (or the continue-gate answering no) leaves it.
//! The roster is passed in explicitly and read-only; there is no
//! ambient global state.

pub mod prompt;

use crate::export::{csv, json, WriteMode};
use crate::ranking;
use crate::roster::{Player, Roster};
use crate::stats::{display_value, StatKey};
use crate::storage::{
    schema::{POSITIONS_TABLE, SEASONS_TABLE},
    RosterDatabase, StorageError,
};
use std::path::PathBuf;

const TOP_MENU: &str = "
  1) List every player on the roster
  2) Pick a player by number and show their stats
  3) Export the selected player's stats to CSV
  4) Search a player by name and show their achievements
  5) Show the team ordered by points per game
  6) Check whether a player is a Hall of Famer
  7) Show the player(s) with the most total rebounds
  8) Seasons ranking: export to CSV / JSON / database
  9) Rank players by combined steals and blocks
 10) Store the distinct positions in a database
 11) Exit

Pick an option: ";

const SEASONS_MENU: &str = "
  A) Save this listing as a CSV file
  B) Save this listing as a JSON file
  C) Save this listing in the database
  D) Leave this sub-menu

Pick an option: ";

const COMBINED_MENU: &str = "
  A) List players ordered by total steals plus total blocks
  B) List all players with their share of the top combined value
  C) List only the first N players with their share
  D) Leave this sub-menu

Pick an option: ";

/// One interactive session over a loaded roster.
pub struct MenuSession<'a> {
    roster: &'a Roster,
    export_dir: PathBuf,
    /// 1-based index picked via option 2; option 3 reuses it or prompts
    /// for a fresh one, then clears it.
    selection: Option<usize>,
}

impl<'a> MenuSession<'a> {
    pub fn new(roster: &'a Roster, export_dir: PathBuf) -> Self {
        Self {
            roster,
            export_dir,
            selection: None,
        }
    }

    /// Run the menu loop until the user exits.
    pub fn run(&mut self) {
        loop {
            match prompt::prompt_top_choice(TOP_MENU) {
                1 => self.list_players(),
                2 => self.select_and_show(),
                3 => self.export_selected_csv(),
                4 => self.search_achievements(),
                5 => self.team_by_points_per_game(),
                6 => self.hall_of_fame_check(),
                7 => self.best_rebounders(),
                8 => self.seasons_submenu(),
                9 => self.combined_submenu(),
                10 => self.positions_table(),
                _ => break,
            }
            if !prompt::prompt_yes_no("\nRun another operation? (yes/no) ") {
                break;
            }
        }
    }

    fn list_players(&self) {
        for player in self.roster.players() {
            println!("Name: {} position: {}", player.name, player.position);
        }
    }

    fn print_indexed(&self) {
        for (i, player) in self.roster.players().iter().enumerate() {
            println!("{}) {}", i + 1, player.name);
        }
    }

    /// Show the indexed roster and return a validated 1-based pick.
    fn prompt_selection(&self) -> usize {
        self.print_indexed();
        prompt::prompt_count(
            &format!("Pick a player by number (1-{}): ", self.roster.len()),
            self.roster.len(),
        )
    }

    fn select_and_show(&mut self) {
        if self.roster.is_empty() {
            println!("The roster is empty.");
            return;
        }
        let index = self.prompt_selection();
        self.selection = Some(index);
        if let Some(player) = self.roster.by_index(index) {
            println!("{}", player.stat_sheet());
        }
    }

    fn export_selected_csv(&mut self) {
        if self.roster.is_empty() {
            println!("The roster is empty.");
            return;
        }
        let index = match self.selection {
            Some(index) => index,
            None => {
                println!("\nNo player selected yet, pick one first...\n");
                let index = self.prompt_selection();
                if let Some(player) = self.roster.by_index(index) {
                    println!("{}", player.stat_sheet());
                }
                index
            }
        };
        self.selection = None;

        let Some(player) = self.roster.by_index(index) else {
            return;
        };
        let path = self.export_dir.join("player_stats.csv");
        match csv::export_labeled_csv(&path, WriteMode::Overwrite, &player.stat_sheet()) {
            Ok(()) => println!("Stats exported to {}", path.display()),
            Err(e) => eprintln!("Export failed: {e}"),
        }
    }

    /// Blocking search: re-prompts until at least one name matches.
    fn prompt_player_search(&self) -> Vec<&Player> {
        loop {
            let pattern = prompt::prompt_line("Player name to search: ");
            let matches = self.roster.find_by_name(&pattern);
            if !matches.is_empty() {
                return matches;
            }
            println!("No player matches, try again.");
        }
    }

    fn search_achievements(&self) {
        if self.roster.is_empty() {
            println!("The roster is empty.");
            return;
        }
        for player in self.prompt_player_search() {
            println!("{}", player.name);
            for achievement in &player.achievements {
                println!("{achievement}");
            }
        }
    }

    fn team_by_points_per_game(&self) {
        let sorted = ranking::sort_by_stat(self.roster.players(), false, StatKey::PointsPerGame);
        for player in &sorted {
            println!(
                "{}: points per game: {}",
                player.name,
                display_value(player.stats.points_per_game)
            );
        }
    }

    fn hall_of_fame_check(&self) {
        if self.roster.is_empty() {
            println!("The roster is empty.");
            return;
        }
        for player in self.prompt_player_search() {
            if player.is_hall_of_fame() {
                println!("{} is a Hall of Famer", player.name);
            } else {
                println!("{} is not a Hall of Famer", player.name);
            }
        }
    }

    fn best_rebounders(&self) {
        let winners = self.roster.extremum_by(StatKey::TotalRebounds, true);
        if winners.is_empty() {
            println!("No player has a total rebounds value.");
            return;
        }
        for player in winners {
            println!(
                "Most total rebounds: {} with {}",
                player.name,
                display_value(player.stats.total_rebounds)
            );
        }
    }

    /// Seasons listing sorted descending, one `Name: N seasons` line
    /// per player. Players without a seasons value are left out.
    fn seasons_report(&self) -> String {
        let sorted = ranking::sort_by_stat(self.roster.players(), false, StatKey::Seasons);
        let mut report = String::new();
        for player in &sorted {
            if let Some(seasons) = player.stats.seasons {
                report.push_str(&format!("{}: {} seasons\n", player.name, seasons));
            }
        }
        report
    }

    fn seasons_submenu(&mut self) {
        loop {
            let report = self.seasons_report();
            print!("{report}");

            let choice = prompt::prompt_submenu_choice(SEASONS_MENU);
            if choice == 'D' {
                break;
            }
            match choice {
                'A' => {
                    let stem = prompt::prompt_file_stem("File name to save as: ");
                    let path = self.export_dir.join(format!("{stem}.csv"));
                    match csv::export_labeled_csv(&path, WriteMode::Overwrite, &report) {
                        Ok(()) => println!("Listing exported to {}", path.display()),
                        Err(e) => eprintln!("Export failed: {e}"),
                    }
                }
                'B' => {
                    let stem = prompt::prompt_file_stem("File name to save as: ");
                    let path = self.export_dir.join(format!("{stem}.json"));
                    let rows = csv::seasons_pairs(&report);
                    match json::export_seasons_json(&path, WriteMode::Overwrite, &rows) {
                        Ok(()) => println!("Listing exported to {}", path.display()),
                        Err(e) => eprintln!("Export failed: {e}"),
                    }
                }
                'C' => self.save_seasons_table(&report),
                _ => {}
            }

            if !prompt::prompt_yes_no("Stay in this sub-menu? (yes/no) ") {
                break;
            }
        }
    }

    fn save_seasons_table(&self, report: &str) {
        let rows = csv::seasons_pairs(report);
        let path = self.export_dir.join("players_by_seasons.db");
        let mut db = match RosterDatabase::open(&path) {
            Ok(db) => db,
            Err(e) => {
                eprintln!("Could not open database: {e}");
                return;
            }
        };
        match db.create_seasons_table(SEASONS_TABLE) {
            Ok(()) => println!("Created table {SEASONS_TABLE}"),
            Err(StorageError::AlreadyExists { table }) => {
                println!("Table {table} already exists")
            }
            Err(e) => {
                eprintln!("Could not create table: {e}");
                return;
            }
        }
        match db.insert_seasons_rows(SEASONS_TABLE, &rows) {
            Ok(()) => println!("Saved {} rows to {}", rows.len(), path.display()),
            Err(e) => eprintln!("Could not insert rows: {e}"),
        }
    }

    fn combined_submenu(&mut self) {
        if self.roster.is_empty() {
            println!("The roster is empty.");
            return;
        }
        loop {
            let choice = prompt::prompt_submenu_choice(COMBINED_MENU);
            if choice == 'D' {
                break;
            }

            let sorted = ranking::sort_by_stat_sum(
                self.roster.players(),
                false,
                StatKey::TotalSteals,
                StatKey::TotalBlocks,
            );
            match choice {
                'A' => {
                    for player in &sorted {
                        println!(
                            "{}",
                            player.summary_line(StatKey::TotalSteals, StatKey::TotalBlocks)
                        );
                    }
                }
                'B' => self.print_percentages(&sorted, sorted.len()),
                'C' => {
                    let limit = prompt::prompt_count(
                        &format!("How many players to list (1-{})? ", sorted.len()),
                        sorted.len(),
                    );
                    self.print_percentages(&sorted, limit);
                }
                _ => {}
            }

            if !prompt::prompt_yes_no("Stay in this sub-menu? (yes/no) ") {
                break;
            }
        }
    }

    fn print_percentages(&self, sorted: &[Player], limit: usize) {
        let shares = ranking::percentage_of_max(
            sorted,
            StatKey::TotalSteals,
            StatKey::TotalBlocks,
            limit,
        );
        for share in shares {
            println!(
                "{}. {} Total steals: {} Total blocks: {} {:.2}%",
                share.rank,
                share.name,
                display_value(share.value_a),
                display_value(share.value_b),
                share.percentage,
            );
        }
    }

    fn positions_table(&self) {
        let positions = self.roster.distinct_positions();
        let path = self.export_dir.join("positions.db");
        let mut db = match RosterDatabase::open(&path) {
            Ok(db) => db,
            Err(e) => {
                eprintln!("Could not open database: {e}");
                return;
            }
        };
        match db.create_positions_table(POSITIONS_TABLE) {
            Ok(()) => println!("Created table {POSITIONS_TABLE}"),
            Err(StorageError::AlreadyExists { table }) => {
                println!("Table {table} already exists")
            }
            Err(e) => {
                eprintln!("Could not create table: {e}");
                return;
            }
        }
        match db.insert_positions(POSITIONS_TABLE, &positions) {
            Ok(()) => println!("Saved {} positions to {}", positions.len(), path.display()),
            Err(e) => eprintln!("Could not insert rows: {e}"),
        }
    }
}
