//! Interactive kiosk loop: the terminal stand-in for the tablet screen.
//!
//! Flow per visitor: pick a group (which also picks the prompt locale),
//! pick a rating, get a thank-you, then the cooldown gate rejects
//! further ratings until the delay elapses. Group selection and quitting
//! stay available during the cooldown.

use crate::core::cooldown::CooldownGate;
use crate::core::submit::SubmitLogic;
use crate::errors::AppResult;
use crate::models::{group::Group, locale::Locale, rating::Rating};
use crate::store::ResponseLog;
use crate::ui::messages::{error, header, success, warning};
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub struct KioskLogic;

impl KioskLogic {
    pub fn run(store: &ResponseLog, delay: Duration, banner: &str) -> AppResult<()> {
        let mut gate = CooldownGate::new(delay);
        let stdin = io::stdin();

        header(banner);
        println!();

        loop {
            println!("お客様はどちらですか？ / Which describes you?");
            println!("  [1] 日本人 / Japanese");
            println!("  [2] Foreigner / 外国人");
            println!("  [q] quit");
            prompt()?;

            let Some(input) = read_line(&stdin)? else {
                break;
            };
            let group = match input.trim() {
                "1" => Group::Japanese,
                "2" => Group::Foreigner,
                "q" | "quit" => break,
                "" => continue,
                other => {
                    warning(format!("Unknown choice: {other}"));
                    continue;
                }
            };
            let locale = group.locale();

            match locale {
                Locale::Ja => println!("本日の体験はいかがでしたか？"),
                Locale::En => println!("How was your experience today?"),
            }
            for (i, rating) in Rating::ALL.iter().enumerate() {
                println!("  [{}] {} {}", i + 1, rating.emoji(), rating.label(locale));
            }
            println!("  [b] back");
            prompt()?;

            let Some(input) = read_line(&stdin)? else {
                break;
            };
            let choice = input.trim().to_string();
            match choice.as_str() {
                "b" | "back" => continue,
                "q" | "quit" => break,
                _ => {}
            }

            let Some(idx) = choice
                .parse::<usize>()
                .ok()
                .filter(|i| (1..=Rating::ALL.len()).contains(i))
            else {
                warning(format!("Unknown choice: {choice}"));
                continue;
            };
            let rating = Rating::ALL[idx - 1];

            let now = Instant::now();
            if let Some(remaining) = gate.remaining(now) {
                warning(format!(
                    "Please wait {}s before the next rating",
                    remaining.as_secs().max(1)
                ));
                continue;
            }

            match SubmitLogic::apply(
                store,
                Some(group),
                rating.canonical(),
                chrono::Local::now().naive_local(),
            ) {
                Ok(_) => {
                    gate.arm(now);
                    match locale {
                        Locale::Ja => success("ご回答ありがとうございました！"),
                        Locale::En => success("Thank you for your feedback!"),
                    }
                }
                // The kiosk keeps running on a failed append; the entry
                // is simply not recorded.
                Err(e) => error(format!("Could not record the rating: {e}")),
            }
            println!();
        }

        // Leaving the screen cancels any pending cooldown.
        gate.reset();
        Ok(())
    }
}

fn prompt() -> AppResult<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// None on EOF (kiosk session ended from outside).
fn read_line(stdin: &io::Stdin) -> AppResult<Option<String>> {
    let mut buf = String::new();
    let n = stdin.read_line(&mut buf)?;
    if n == 0 { Ok(None) } else { Ok(Some(buf)) }
}
