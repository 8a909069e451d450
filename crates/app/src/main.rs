//! AllSafe — text-mode storefront
//!
//! A thin line-oriented adapter over the command dispatcher. All logic
//! lives in the dispatcher and the core stores; this loop only translates
//! typed input into commands and prints the active section.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod debounce;
mod dispatch;
mod modal;
mod notify;
mod router;
mod state;
mod views;

use allsafe_core::{Database, KeyValueStore};
use dispatch::{dispatch, Command};
use modal::AuthTab;
use router::Section;
use state::AppState;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting AllSafe");

    let mut state = match AppState::open() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", views::render_home(&state.catalog));
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if line == "help" {
            print_help();
            continue;
        }

        let Some(command) = parse_command(line) else {
            println!("Unknown command. Type `help` for the list.");
            continue;
        };

        let now = Instant::now();
        if let Err(e) = dispatch(&mut state, command, now) {
            tracing::error!("Command failed: {}", e);
            continue;
        }

        // A blocking prompt has no timer wheel; apply pending search now
        if let Some(text) = state.search.flush() {
            state.history_search = text;
        }

        render(&state, now);
    }
}

fn render<S: KeyValueStore>(state: &AppState<S>, now: Instant) {
    if let Some(message) = state.notifier.active(now) {
        println!("*** {message}");
    }

    if state.modal.is_open() {
        match state.modal.active_tab() {
            Some(AuthTab::Login) => println!("[Auth modal: Login tab]  login <email> <password>"),
            _ => println!("[Auth modal: Register tab]  register <name> <email> <password>"),
        }
        return;
    }

    print!("{}", views::render_nav(&state.router));

    let pill = views::render_user_pill(state.accounts().current_session().as_ref());
    if !pill.is_empty() {
        print!("{pill}");
    }

    match state.router.active() {
        Section::Home => println!("{}", views::render_home(&state.catalog)),
        Section::Products => println!("{}", views::render_products(&state.product_view())),
        Section::Detail => {
            if let Some(product) = state.detail_product() {
                println!("{}", views::render_detail(product));
            }
        }
        Section::PurchaseHistory => println!("{}", views::render_history(&state.history_view())),
        // Reached only via deep links; the modal covers these
        Section::Login | Section::Register => {}
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;
    let rest: Vec<&str> = parts.collect();

    match (verb, rest.as_slice()) {
        ("home", []) => Some(Command::Navigate(Section::Home)),
        ("products", []) => Some(Command::Navigate(Section::Products)),
        ("history", []) => Some(Command::Navigate(Section::PurchaseHistory)),
        ("go", [section]) => Section::parse(section).map(Command::Navigate),
        ("view", [id]) => Some(Command::ViewProduct {
            product_id: (*id).to_string(),
        }),
        ("back", []) => Some(Command::Back),
        ("buy", [id]) => Some(Command::Buy {
            product_id: (*id).to_string(),
            qty_raw: "1".to_string(),
        }),
        ("buy", [id, qty]) => Some(Command::Buy {
            product_id: (*id).to_string(),
            qty_raw: (*qty).to_string(),
        }),
        ("filter", [category]) => Some(Command::Filter {
            category_raw: (*category).to_string(),
        }),
        ("sort", [key]) => Some(Command::Sort {
            key_raw: (*key).to_string(),
        }),
        ("search", terms) => Some(Command::Search {
            text: terms.join(" "),
        }),
        ("hsort", [key]) => Some(Command::SortHistory {
            key_raw: (*key).to_string(),
        }),
        ("auth", ["login"]) => Some(Command::OpenAuth(AuthTab::Login)),
        ("auth", ["register"]) => Some(Command::OpenAuth(AuthTab::Register)),
        ("tab", ["login"]) => Some(Command::SwitchTab(AuthTab::Login)),
        ("tab", ["register"]) => Some(Command::SwitchTab(AuthTab::Register)),
        ("close", []) => Some(Command::CloseAuth),
        ("login", [email, password]) => Some(Command::Login {
            email: (*email).to_string(),
            password: (*password).to_string(),
        }),
        ("register", [name, email, password]) => Some(Command::Register {
            name: (*name).to_string(),
            email: (*email).to_string(),
            password: (*password).to_string(),
        }),
        ("logout", []) => Some(Command::Logout),
        _ => None,
    }
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 home | products | history      switch section\n\
         \x20 view <id>                      product detail\n\
         \x20 back                           back to products\n\
         \x20 buy <id> [qty]                 record a purchase\n\
         \x20 filter <category>              all|antivirus|vpn|firewall|cloud\n\
         \x20 sort <key>                     price-low|price-high|popularity|newest\n\
         \x20 search <text>                  filter purchase history\n\
         \x20 hsort <key>                    date-new|date-old|total-high|total-low\n\
         \x20 auth login|register            open the auth modal\n\
         \x20 tab login|register             switch modal tab\n\
         \x20 close                          close the auth modal\n\
         \x20 login <email> <password>\n\
         \x20 register <name> <email> <password>\n\
         \x20 logout\n\
         \x20 quit"
    );
}
