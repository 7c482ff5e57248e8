//! Tiempo command line: browse verbs and take conjugation quizzes.

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rusqlite::Connection;
use std::io::{self, BufRead, Write};
use tiempo::database::db;
use tiempo::export::json::export_session_to_path;
use tiempo::models::SessionState;
use tiempo::quiz::{start_quiz, summarize};
use tiempo::{QuizConfig, QuizSession, Result};

#[derive(Parser)]
#[command(name = "tiempo")]
#[command(about = "Spanish verb conjugation trainer", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(short, long, default_value = "tiempo.db")]
    database: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search verbs by infinitive prefix
    Search { query: String },

    /// Show the conjugation table of a verb
    Show { infinitive: String },

    /// List the most common verbs available
    Common,

    /// Take a quiz
    Quiz {
        /// Quiz a single verb
        #[arg(long)]
        verb: Option<String>,

        /// Moods to include (repeatable, default Indicativo)
        #[arg(long = "mood")]
        moods: Vec<String>,

        /// Tenses to include (repeatable, default Presente)
        #[arg(long = "tense")]
        tenses: Vec<String>,

        /// Number of questions
        #[arg(short = 'n', long, default_value_t = tiempo::catalogue::DEFAULT_QUESTION_COUNT)]
        count: usize,

        /// Ask every matching conjugation
        #[arg(long, conflicts_with = "count")]
        all: bool,

        /// Only quiz favorite verbs
        #[arg(long)]
        favorites: bool,

        /// Seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Write the session report to this JSON file
        #[arg(long)]
        export: Option<String>,
    },

    /// Manage favorite verbs
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Show or change settings
    Settings {
        /// Include vosotros/vosotras forms in quizzes and tables
        #[arg(long)]
        vosotros: Option<bool>,
    },

    /// Dataset statistics
    Stats,
}

#[derive(Subcommand)]
enum FavoriteAction {
    Add { infinitive: String },
    Remove { infinitive: String },
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        pretty_env_logger::formatted_builder()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        pretty_env_logger::init();
    }

    let conn = db::open_database(&cli.database)?;
    if db::seed_sample_data(&conn)? > 0 {
        println!("Sample data created!");
    }

    match cli.command {
        Commands::Search { query } => {
            for verb in db::search_verbs(&query, &conn)? {
                println!("{} - {}", verb.infinitive, verb.translation);
            }
        }
        Commands::Show { infinitive } => show_verb(&infinitive, &conn)?,
        Commands::Common => {
            for verb in db::common_verbs(&conn)? {
                println!("{} - {}", verb.infinitive, verb.translation);
            }
        }
        Commands::Quiz {
            verb,
            moods,
            tenses,
            count,
            all,
            favorites,
            seed,
            export,
        } => {
            let mut config = QuizConfig::setup_defaults();
            config.verb = verb;
            if !moods.is_empty() {
                config.moods = moods;
            }
            if !tenses.is_empty() {
                config.tenses = tenses;
            }
            config.question_count = if all { None } else { Some(count) };
            if favorites {
                config = config.with_favorites(&db::load_favorites(&conn)?);
            }
            run_quiz(config, seed, export.as_deref(), &conn)?;
        }
        Commands::Favorite { action } => {
            let mut favorites = db::load_favorites(&conn)?;
            match action {
                FavoriteAction::Add { infinitive } => {
                    if db::get_verb(&infinitive, &conn)?.is_none() {
                        return Err(tiempo::Error::VerbNotFound(infinitive));
                    }
                    favorites.add(&infinitive);
                    db::save_favorites(&favorites, &conn)?;
                }
                FavoriteAction::Remove { infinitive } => {
                    favorites.remove(&infinitive);
                    db::save_favorites(&favorites, &conn)?;
                }
                FavoriteAction::List => {
                    for infinitive in favorites.iter() {
                        println!("{infinitive}");
                    }
                }
            }
        }
        Commands::Settings { vosotros } => {
            let mut settings = db::load_settings(&conn)?;
            if let Some(include) = vosotros {
                settings.include_vosotros = include;
                db::save_settings(&settings, &conn)?;
            }
            println!("include vosotros/vosotras: {}", settings.include_vosotros);
        }
        Commands::Stats => {
            let stats = db::database_stats(&conn)?;
            println!(
                "{} verbs, {} conjugations",
                stats.verb_count, stats.conjugation_count
            );
        }
    }

    Ok(())
}

fn show_verb(infinitive: &str, conn: &Connection) -> Result<()> {
    let verb = db::get_verb(infinitive, conn)?
        .ok_or_else(|| tiempo::Error::VerbNotFound(infinitive.to_string()))?;
    let mut table = db::get_verb_conjugations(infinitive, conn)?;
    if !db::load_settings(conn)?.include_vosotros {
        table = table.without_vosotros();
    }

    println!("{} ({})", verb.infinitive, verb.translation);
    for mood in &table.moods {
        println!("\n== {} ==", mood.mood);
        for tense in &mood.tenses {
            println!("  {}", tense.tense);
            for conj in &tense.conjugations {
                println!("    {:<22} {}", conj.performer, conj.conjugated_form);
            }
        }
    }
    Ok(())
}

fn run_quiz(
    config: QuizConfig,
    seed: Option<u64>,
    export: Option<&str>,
    conn: &Connection,
) -> Result<()> {
    let settings = db::load_settings(conn)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let Some(mut session) = start_quiz(config, &settings, conn, &mut rng)? else {
        println!("No questions could be generated with the selected configuration");
        return Ok(());
    };
    info!("Starting quiz with {} questions", session.total_count());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !ask_questions(&mut session, &mut lines)? {
            println!("Quiz abandoned.");
            return Ok(());
        }

        let summary = summarize(&session);
        println!(
            "\n{} {}% ({} / {} correct)",
            summary.message, summary.percentage, summary.score, summary.total
        );
        for result in session.results().iter().filter(|r| !r.is_correct) {
            println!(
                "  {}: {} (you wrote '{}')",
                result.question.prompt(),
                result.question.correct_answer,
                result.user_answer
            );
        }

        if let Some(path) = export {
            export_session_to_path(&session, path)?;
        }

        print!("Try again? [y/N] ");
        io::stdout().flush()?;
        let again = match lines.next() {
            Some(line) => line?.trim().eq_ignore_ascii_case("y"),
            None => false,
        };
        if !again {
            return Ok(());
        }
        session.reset()?;
    }
}

/// Returns false when input ends before the quiz is completed.
fn ask_questions<I>(session: &mut QuizSession, lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    while let Some(question) = session.current_question() {
        println!("\n{}", session.progress_message());
        print!("{}\n> ", question.prompt());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let result = session.submit_answer(&line?)?;
        if result.is_correct {
            println!("Correct!");
        } else {
            println!("Incorrect. The answer is '{}'", result.question.correct_answer);
        }

        if session.advance()? == SessionState::Completed {
            break;
        }
    }
    Ok(true)
}
