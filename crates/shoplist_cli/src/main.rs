//! Interactive terminal host for the shoplist core.
//!
//! # Responsibility
//! - Implement the boundary traits over stdin/stdout.
//! - Translate typed commands into the structured UI events a page host
//!   would deliver, including per-row click paths.
//!
//! # Invariants
//! - Row numbers refer to the currently displayed frame; click paths are
//!   built from IDs found in that frame, never from store internals.
//! - Names printed to the terminal come from the rendered markup, with
//!   entities decoded.

use std::cell::{Cell, RefCell};
use std::env;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use shoplist_core::{
    core_version, default_log_level, init_logging, App, ClickPath, DisplaySurface, EditPrompt,
    PathNode, UiEvent, ValueInput, ACTION_ATTR, ACTION_DELETE, ACTION_EDIT, ACTION_TOGGLE,
    ITEM_ID_ATTR, NAME_CHECKED_CLASS, ROW_CLASS,
};

static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"<li class="{ROW_CLASS}" {ITEM_ID_ATTR}="([^"]+)"><span class="([^"]*)">([^<]*)</span>"#
    ))
    .expect("valid row regex")
});

fn main() {
    init_host_logging();

    println!("shoplist {}", core_version());
    println!("type `help` for commands");

    let frame = Rc::new(RefCell::new(String::new()));
    let entry = Rc::new(RefCell::new(String::new()));
    let search = Rc::new(RefCell::new(String::new()));
    let editor_open = Rc::new(Cell::new(false));

    let mut app = App::bootstrap(
        Box::new(TerminalSurface {
            frame: Rc::clone(&frame),
        }),
        Box::new(CommandField {
            value: Rc::clone(&entry),
        }),
        Box::new(CommandField {
            value: Rc::clone(&search),
        }),
        Box::new(TerminalEditor {
            opened: Rc::clone(&editor_open),
        }),
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt("> ");
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let command = parse_command(&line);
        debug!("event=command module=cli kind={}", command.kind());
        match command {
            Command::Add(text) => {
                *entry.borrow_mut() = text;
                app.handle_event(UiEvent::NewItemSubmitted);
            }
            Command::Toggle(number) => click_row(&mut app, &frame, number, ACTION_TOGGLE),
            Command::Delete(number) => click_row(&mut app, &frame, number, ACTION_DELETE),
            Command::Edit(number) => {
                click_row(&mut app, &frame, number, ACTION_EDIT);
                if editor_open.take() {
                    prompt("edit> ");
                    match lines.next() {
                        Some(Ok(text)) if text.trim() != ":cancel" => {
                            app.handle_event(UiEvent::EditSubmitted(text));
                        }
                        _ => {
                            app.handle_event(UiEvent::EditCancelled);
                            println!("(edit cancelled)");
                        }
                    }
                }
            }
            Command::Hide => app.handle_event(UiEvent::HideCompletedClicked),
            Command::Search(term) => {
                *search.borrow_mut() = term;
                app.handle_event(UiEvent::SearchSubmitted);
            }
            Command::Show => print_frame(&frame.borrow()),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Empty => {}
            Command::Invalid(usage) => println!("usage: {usage}"),
            Command::Unknown(head) => println!("unknown command `{head}`; type `help`"),
        }
    }
}

// Logging is opt-in for the host: without a directory there is nothing to
// write to, and the core stays quiet.
fn init_host_logging() {
    let Ok(dir) = env::var("SHOPLIST_LOG_DIR") else {
        return;
    };
    let level = env::var("SHOPLIST_LOG").unwrap_or_else(|_| default_log_level().to_string());
    if let Err(message) = init_logging(&level, &dir) {
        eprintln!("logging disabled: {message}");
    }
}

/// Delivers the click a page user would produce on a row's action button:
/// the button, the actions span around it, the row, the list container.
fn click_row(app: &mut App, frame: &RefCell<String>, number: usize, action: &'static str) {
    let id = nth_row_id(&frame.borrow(), number);
    let Some(id) = id else {
        println!("no row {number} on screen");
        return;
    };
    let path = ClickPath::new()
        .node(PathNode::new("button").attr(ACTION_ATTR, action))
        .node(PathNode::new("span"))
        .node(PathNode::new("li").attr(ITEM_ID_ATTR, id))
        .node(PathNode::new("ul"));
    app.handle_event(UiEvent::ListClicked(path));
}

/// One row as shown on screen, recovered from the rendered markup.
struct ScreenRow {
    id: String,
    checked: bool,
    name: String,
}

fn parse_rows(markup: &str) -> Vec<ScreenRow> {
    ROW_RE
        .captures_iter(markup)
        .map(|caps| ScreenRow {
            id: caps[1].to_string(),
            checked: caps[2].contains(NAME_CHECKED_CLASS),
            name: decode_entities(&caps[3]),
        })
        .collect()
}

fn nth_row_id(markup: &str, number: usize) -> Option<String> {
    let index = number.checked_sub(1)?;
    parse_rows(markup).into_iter().nth(index).map(|row| row.id)
}

// Inverse of the renderer's escaping; `&amp;` must come last so doubly
// escaped text stays intact.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

fn print_frame(markup: &str) {
    let rows = parse_rows(markup);
    if rows.is_empty() {
        println!("  (nothing to show)");
        return;
    }
    for (index, row) in rows.iter().enumerate() {
        let mark = if row.checked { "x" } else { " " };
        println!("{:>3} [{mark}] {}", index + 1, row.name);
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <name>     append an item (empty names are allowed)");
    println!("  check <row>    toggle the checked mark of a visible row");
    println!("  delete <row>   remove a visible row");
    println!("  edit <row>     rewrite a visible row's name; `:cancel` aborts");
    println!("  hide           hide or show checked items");
    println!("  search [term]  one-shot filter to names containing term");
    println!("  show           reprint the visible list");
    println!("  quit           leave");
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Shared frame buffer: what the page's list container currently shows.
struct TerminalSurface {
    frame: Rc<RefCell<String>>,
}

impl DisplaySurface for TerminalSurface {
    fn replace_list(&mut self, markup: &str) {
        *self.frame.borrow_mut() = markup.to_string();
        print_frame(markup);
    }
}

/// Text field fed by command arguments instead of keystrokes.
struct CommandField {
    value: Rc<RefCell<String>>,
}

impl ValueInput for CommandField {
    fn read_value(&self) -> Option<String> {
        Some(self.value.borrow().clone())
    }

    fn clear_value(&mut self) {
        self.value.borrow_mut().clear();
    }
}

/// Editor that flags the open request; the main loop reads the outcome.
struct TerminalEditor {
    opened: Rc<Cell<bool>>,
}

impl EditPrompt for TerminalEditor {
    fn open(&mut self, current_name: &str) {
        self.opened.set(true);
        println!("editing \"{current_name}\"; type the new name, or :cancel");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Edit(usize),
    Hide,
    Search(String),
    Show,
    Help,
    Quit,
    Empty,
    Invalid(&'static str),
    Unknown(String),
}

impl Command {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Toggle(_) => "toggle",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Hide => "hide",
            Self::Search(_) => "search",
            Self::Show => "show",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Empty => "empty",
            Self::Invalid(_) => "invalid",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Splits one input line into a command.
///
/// The remainder after `add` and `search` keeps its inner spacing verbatim;
/// names are never validated or rejected.
fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let (head, rest) = match trimmed.split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (trimmed, ""),
    };
    match head {
        "add" => Command::Add(rest.to_string()),
        "check" | "toggle" => row_command(rest, Command::Toggle, "check <row>"),
        "delete" => row_command(rest, Command::Delete, "delete <row>"),
        "edit" => row_command(rest, Command::Edit, "edit <row>"),
        "hide" => Command::Hide,
        "search" => Command::Search(rest.to_string()),
        "show" | "list" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn row_command(rest: &str, build: fn(usize) -> Command, usage: &'static str) -> Command {
    match rest.trim().parse::<usize>() {
        Ok(number) if number >= 1 => build(number),
        _ => Command::Invalid(usage),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_entities, nth_row_id, parse_command, parse_rows, Command};
    use shoplist_core::{list_html, ListStore, ViewFilter};

    #[test]
    fn parse_command_covers_the_typed_surface() {
        assert_eq!(
            parse_command("add oat milk"),
            Command::Add("oat milk".to_string())
        );
        assert_eq!(parse_command("add"), Command::Add(String::new()));
        assert_eq!(parse_command("check 2"), Command::Toggle(2));
        assert_eq!(parse_command("toggle 2"), Command::Toggle(2));
        assert_eq!(parse_command("delete 1"), Command::Delete(1));
        assert_eq!(parse_command("edit 3"), Command::Edit(3));
        assert_eq!(parse_command("hide"), Command::Hide);
        assert_eq!(
            parse_command("search app"),
            Command::Search("app".to_string())
        );
        assert_eq!(parse_command("search"), Command::Search(String::new()));
        assert_eq!(parse_command("  show  "), Command::Show);
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn row_commands_reject_unusable_numbers() {
        assert!(matches!(parse_command("check"), Command::Invalid(_)));
        assert!(matches!(parse_command("check zero"), Command::Invalid(_)));
        assert!(matches!(parse_command("delete 0"), Command::Invalid(_)));
        assert!(matches!(parse_command("drop 1"), Command::Unknown(_)));
    }

    #[test]
    fn parse_rows_recovers_rows_from_real_markup() {
        let mut store = ListStore::new();
        let eggs = store.add_item("eggs");
        let jam = store.add_item(r#"jam & "toast""#);
        store.toggle_checked(eggs);

        let markup = list_html(store.items(), &ViewFilter::default());
        let rows = parse_rows(&markup);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, eggs.to_string());
        assert!(rows[0].checked);
        assert_eq!(rows[0].name, "eggs");
        assert!(!rows[1].checked);
        assert_eq!(rows[1].name, r#"jam & "toast""#);

        assert_eq!(nth_row_id(&markup, 2), Some(jam.to_string()));
        assert_eq!(nth_row_id(&markup, 3), None);
        assert_eq!(nth_row_id(&markup, 0), None);
    }

    #[test]
    fn decode_entities_inverts_renderer_escaping() {
        assert_eq!(
            decode_entities("a &amp;&lt;b&gt; &quot;c&quot;"),
            r#"a &<b> "c""#
        );
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
