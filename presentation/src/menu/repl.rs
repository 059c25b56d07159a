//! Menu REPL for curating the catalog and building itineraries
//!
//! One iteration per command: the operator picks a menu entry, the matching
//! flow collects its inputs (re-prompting on invalid ones), calls the
//! service, and prints a success or error line. Ctrl-C inside a flow
//! cancels it and returns to the menu.

use crate::output::console::ItineraryFormatter;
use colored::Colorize;
use itinera_application::{CatalogService, CatalogStore, NewAttraction, NewQuestionPair};
use itinera_domain::AnswerCode;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::collections::HashMap;

/// Interactive catalog menu
pub struct MenuRepl<S: CatalogStore> {
    service: CatalogService<S>,
}

impl<S: CatalogStore> MenuRepl<S> {
    pub fn new(service: CatalogService<S>) -> Self {
        Self { service }
    }

    /// Run the menu loop until the operator quits
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("itinera").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("itinera> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(&line);
                    if self.dispatch(&mut rl, &line)? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Itinera - Trip Catalog           │");
        println!("╰─────────────────────────────────────────────╯");
        self.print_menu();
    }

    fn print_menu(&self) {
        println!();
        println!("Choose an option:");
        println!("  1. Add a location");
        println!("  2. Remove a location");
        println!("  3. Add an activity type");
        println!("  4. Add an attraction");
        println!("  5. Add a question pair");
        println!("  6. Build an itinerary for a group");
        println!("  7. Quit");
        println!();
    }

    /// Returns `Ok(true)` when the operator asked to quit
    fn dispatch(&mut self, rl: &mut DefaultEditor, line: &str) -> RlResult<bool> {
        match line {
            "1" => self.add_location(rl)?,
            "2" => self.remove_location(rl)?,
            "3" => self.add_activity_type(rl)?,
            "4" => self.add_attraction(rl)?,
            "5" => self.add_question(rl)?,
            "6" => self.build_itinerary(rl)?,
            "7" | "q" | "quit" | "exit" => {
                println!("Bye!");
                return Ok(true);
            }
            "menu" | "help" | "?" => self.print_menu(),
            _ => println!("{}", "Error, you did not select a valid number".red()),
        }
        Ok(false)
    }

    fn add_location(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(label) = prompt_nonempty(rl, "Type a location to add: ")? else {
            return cancelled();
        };
        match self.service.add_location(&label) {
            Ok(stored) => println!("{}", format!("Location {stored} added successfully.").green()),
            Err(err) => println!("{}", format!("Error: {err}").red()),
        }
        Ok(())
    }

    fn remove_location(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(label) = prompt_nonempty(rl, "Type a location to remove: ")? else {
            return cancelled();
        };
        match self.service.remove_location(&label) {
            Ok(removed) => println!("{}", format!("Location {removed} removed.").green()),
            Err(err) => println!("{}", format!("Error: {err}").red()),
        }
        Ok(())
    }

    fn add_activity_type(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(label) = prompt_nonempty(rl, "Type an activity type to add: ")? else {
            return cancelled();
        };
        match self.service.add_activity_type(&label) {
            Ok(stored) => println!(
                "{}",
                format!("Activity type {stored} added successfully.").green()
            ),
            Err(err) => println!("{}", format!("Error: {err}").red()),
        }
        Ok(())
    }

    fn add_attraction(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(name) = prompt_nonempty(rl, "Type an attraction to add: ")? else {
            return cancelled();
        };
        if !self.service.catalog().is_attraction_name_valid(&name) {
            println!(
                "{}",
                "Error, you already have this attraction in the system".red()
            );
            return Ok(());
        }

        // the reserved questions come first, answered from the vocabularies
        let mandatory: Vec<(String, Vec<String>)> = self
            .service
            .catalog()
            .mandatory_questions()
            .iter()
            .map(|(question, options)| (question.to_string(), options.to_vec()))
            .collect();
        if mandatory.iter().any(|(_, options)| options.is_empty()) {
            println!(
                "{}",
                "Add at least one location and one activity type first.".red()
            );
            return Ok(());
        }
        let mut labels = Vec::with_capacity(2);
        for (question, options) in &mandatory {
            println!("{}", name.bold());
            let Some(choice) = prompt_choice(rl, question, options)? else {
                return cancelled();
            };
            labels.push(choice);
        }
        let activity_type = labels.remove(0);
        let location = labels.remove(0);

        let questions = self.service.catalog().attraction_questions().to_vec();
        let mut answers = HashMap::new();
        for question in questions {
            println!("{}", name.bold());
            let Some(bit) = prompt_yes_no(rl, &question)? else {
                return cancelled();
            };
            answers.insert(question, bit);
        }

        match self.service.add_attraction(NewAttraction {
            name,
            activity_type,
            location,
            answers,
        }) {
            Ok(()) => println!("{}", "Attraction added successfully.".green()),
            Err(err) => println!("{}", format!("Error: {err}").red()),
        }
        Ok(())
    }

    fn add_question(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(attraction_question) = prompt_nonempty(
            rl,
            "Type the yes/no question geared towards an attraction: ",
        )?
        else {
            return cancelled();
        };
        let Some(group_question) =
            prompt_nonempty(rl, "Type the equivalent question geared towards a group: ")?
        else {
            return cancelled();
        };
        if !self
            .service
            .catalog()
            .is_question_pair_valid(&attraction_question, &group_question)
        {
            println!(
                "{}",
                "Error, you already have this question in the system".red()
            );
            return Ok(());
        }

        // backfill one answer per existing attraction
        let names: Vec<String> = self
            .service
            .catalog()
            .attraction_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let mut answers = HashMap::new();
        for name in names {
            println!("{}", name.bold());
            let Some(bit) = prompt_yes_no(rl, &attraction_question)? else {
                return cancelled();
            };
            answers.insert(name, bit);
        }

        match self.service.add_question(NewQuestionPair {
            attraction_question,
            group_question,
            answers,
        }) {
            Ok(()) => println!("{}", "Questions added successfully.".green()),
            Err(err) => println!("{}", format!("Error: {err}").red()),
        }
        Ok(())
    }

    fn build_itinerary(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let questions = self.service.catalog().group_questions().to_vec();
        let mut bits = Vec::with_capacity(questions.len());
        for question in &questions {
            let Some(bit) = prompt_yes_no(rl, question)? else {
                return cancelled();
            };
            bits.push(bit);
        }
        let code = AnswerCode::from_bits(bits);

        match self.service.build_itinerary(&code) {
            Ok(itinerary) => print!("{}", ItineraryFormatter::format(&itinerary)),
            Err(err) => println!("{}", format!("Error: {err}").red()),
        }
        Ok(())
    }
}

fn cancelled() -> RlResult<()> {
    println!("{}", "Cancelled.".yellow());
    Ok(())
}

/// Read one line; `None` means the operator cancelled the flow
fn prompt_line(rl: &mut DefaultEditor, prompt: &str) -> RlResult<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Read until the operator types something non-empty
fn prompt_nonempty(rl: &mut DefaultEditor, prompt: &str) -> RlResult<Option<String>> {
    loop {
        let Some(line) = prompt_line(rl, prompt)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(line));
        }
    }
}

/// Ask a yes/no question until a valid answer arrives
fn prompt_yes_no(rl: &mut DefaultEditor, question: &str) -> RlResult<Option<bool>> {
    loop {
        let Some(answer) = prompt_line(rl, &format!("{question} [1 = yes, 0 = no]: "))? else {
            return Ok(None);
        };
        match answer.to_lowercase().as_str() {
            "1" | "y" | "yes" => return Ok(Some(true)),
            "0" | "n" | "no" => return Ok(Some(false)),
            _ => println!(
                "{}",
                "Error, you didn't select a valid number. Try again.".red()
            ),
        }
    }
}

/// Ask to pick one of `options`, case-insensitively; returns the stored form
fn prompt_choice(
    rl: &mut DefaultEditor,
    question: &str,
    options: &[String],
) -> RlResult<Option<String>> {
    println!("{question}");
    println!("  [{}]", options.join(", "));
    loop {
        let Some(answer) = prompt_line(rl, "Type an option from the list above: ")? else {
            return Ok(None);
        };
        if let Some(stored) = options
            .iter()
            .find(|option| option.eq_ignore_ascii_case(&answer))
        {
            return Ok(Some(stored.clone()));
        }
        println!(
            "{}",
            "Error, you didn't select a valid option. Try again.".red()
        );
    }
}
