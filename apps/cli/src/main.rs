//! Terminal frontend for the flag quiz.
//!
//! All quiz logic lives in flagquiz-core; this binary only renders the
//! current card, feeds typed lines into the engine, and retires items
//! the engine judged correct.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use flagquiz_core::{catalog, EngineConfig, QuizEngine};

fn main() -> Result<()> {
    let records = catalog::validate(catalog::builtin()).context("loading built-in catalog")?;
    let mut engine = QuizEngine::new(records.clone(), EngineConfig::default());

    println!("Flag quiz: type the country name ({}).", engine.language());
    println!("Commands: :next  :prev  :lang <code>  :reset  :quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if engine.is_complete() {
            println!("\nDeck cleared! Final score: {}.", engine.score());
            println!("Type :reset to play again, anything else to leave.");
        } else {
            render(&engine);
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("reading stdin")?;
        let input = line.trim();

        match input {
            ":quit" => break,
            ":next" => engine.advance(),
            ":prev" => engine.retreat(),
            ":reset" => {
                // Restart from the full catalog, not just the survivors,
                // so a cleared deck comes back too.
                engine.reset(Some(records.clone()));
                println!("Reshuffled.");
            }
            _ if input.starts_with(":lang") => match input.split_whitespace().nth(1) {
                Some(code) => {
                    engine.set_language(code);
                    println!("Answers now checked against \"{code}\".");
                }
                None => println!("Usage: :lang <code>"),
            },
            _ if engine.is_complete() => break,
            _ => submit(&mut engine, input),
        }
    }

    println!("Score: {}", engine.score());
    Ok(())
}

fn render(engine: &QuizEngine) {
    let position = engine.current_index().map(|i| i + 1).unwrap_or(0);
    let item = engine.current_item().expect("non-empty deck has a current item");
    println!(
        "\n[{position}/{}]  {}   (score: {})",
        engine.len(),
        item.record.flag,
        engine.score()
    );
}

fn submit(engine: &mut QuizEngine, text: &str) {
    let Some(item) = engine.current_item() else { return };
    let id = item.record.id;
    match engine.submit_answer(id, text) {
        Ok(result) if result.correct => {
            println!("Correct!");
            engine.remove(id);
        }
        Ok(_) => println!("Not quite. Try again, or :next to skip."),
        // The item vanished between render and submit; nothing to do.
        Err(_) => {}
    }
}
