//! 対話メニュー
//!
//! 選択を読み取り、各操作に振り分けるだけのループ。操作の失敗は
//! メッセージを表示してメニューに戻る。

use crate::commands;
use crate::error::{Result, StoreError};
use crate::store::RecordStore;
use console::Term;
use dialoguer::Input;
use log::debug;
use std::io::{BufRead, IsTerminal, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Delete,
    Search,
    WeeklyCost,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Display),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::WeeklyCost),
            "6" => Ok(MenuChoice::Exit),
            _ => Err("Invalid choice. Please enter a number between 1 and 6.".to_string()),
        }
    }
}

/// 1行入力の取得元
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// 端末から入力を読む（dialoguer）
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| StoreError::Prompt(e.to_string()))
    }
}

/// パイプ・リダイレクトされた入力を1行ずつ読む
///
/// 入力が尽きた場合のみ `Prompt` エラーを返す。
pub struct LinePrompter<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.echo, "{}: ", prompt)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StoreError::Prompt("end of input".into()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// stdinとstderrが端末ならdialoguerを使う
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && Term::stderr().is_term()
}

pub fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nMenu:")?;
    writeln!(out, "1. Display contents of JSON file")?;
    writeln!(out, "2. Add a new record to JSON file")?;
    writeln!(out, "3. Delete a record from JSON file")?;
    writeln!(out, "4. Search data in JSON file by field")?;
    writeln!(out, "5. Calculate total cost of details for the week")?;
    writeln!(out, "6. Exit")?;
    Ok(())
}

/// Exitが選ばれるまでメニューを繰り返す
///
/// 入力そのものが読めなくなった場合のみエラーを返す。
pub fn run_menu<P: Prompter, W: Write>(
    store: &RecordStore,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    loop {
        print_menu(out)?;
        let input = prompter.ask("Enter your choice (1-6)")?;

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        debug!("menu choice: {:?}", choice);

        let outcome = match choice {
            MenuChoice::Display => commands::display_contents(store, out),
            MenuChoice::Add => {
                let line = prompter.ask("Enter a new record in JSON format")?;
                commands::add_record(store, &line, out)
            }
            MenuChoice::Delete => {
                let line = prompter.ask("Enter the index of the record to delete")?;
                commands::delete_record(store, &line, out)
            }
            MenuChoice::Search => {
                let field = prompter.ask("Enter the field to search")?;
                let value = prompter.ask("Enter the value to search for")?;
                let value = commands::parse_search_value(&value, false);
                commands::search_records(store, &field, &value, None, out).map(|_| ())
            }
            MenuChoice::WeeklyCost => {
                let line = prompter.ask("Enter the cutoff date (YYYY-MM-DD)")?;
                commands::weekly_cost(store, &line, out).map(|_| ())
            }
            MenuChoice::Exit => return Ok(()),
        };

        if let Err(e) = outcome {
            writeln!(out, "{}", e)?;
        }
    }
}
