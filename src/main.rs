use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::bail;
use color_eyre::Result;

use elg_client::models::{
    CreateRoomForm, JoinRoomForm, PlayerScore, Question, QuestionKind, RegisterForm, RoomStatus,
    SubmitAnswerForm,
};
use elg_client::{names, Api, FsCredentials, QuestionFilter, RoomFilter, Route, Store};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Backend API base URL.
    #[arg(long, env = "ELG_API_URL", default_value = names::DEFAULT_BASE_URL)]
    api_url: String,

    /// Directory holding the credential cache.
    #[arg(long, env = "ELG_DATA_DIR", default_value = ".elg-client")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and cache the session token.
    Login { email: String, password: String },
    /// Create an account and sign in.
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Sign out and drop the cached token.
    Logout,
    /// Show the signed-in account.
    Profile,
    /// List question categories.
    Categories,
    /// Show one category and a sample of its questions.
    Category {
        id: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List questions.
    Questions {
        #[arg(long)]
        category_id: Option<i64>,
        /// Filter by kind: multiple_choice or fill_blank.
        #[arg(long = "type")]
        question_type: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fetch one random question.
    Random {
        #[arg(long)]
        category_id: Option<i64>,
    },
    /// Show one question.
    Question { id: i64 },
    /// List open game rooms.
    Rooms {
        /// Filter by status: waiting, playing or finished.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a game room and enter it.
    CreateRoom {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long, default_value_t = 4)]
        max_players: i32,
        #[arg(long, default_value_t = 10)]
        question_count: i32,
        #[arg(long)]
        private: bool,
        #[arg(long)]
        password: Option<String>,
    },
    /// Join a room by id.
    Join {
        room_id: i64,
        #[arg(long)]
        password: Option<String>,
    },
    /// Find a room by its invite code.
    FindRoom { code: String },
    /// Leave a room.
    Leave { room_id: i64 },
    /// Toggle your ready flag in a room.
    Ready { room_id: i64 },
    /// Start the game (owner only).
    Start { room_id: i64 },
    /// Submit an answer for the current question.
    Answer {
        room_id: i64,
        question_id: i64,
        answer: String,
        #[arg(long, default_value_t = 0)]
        time_taken: u32,
    },
    /// End the game in a room (owner only).
    EndGame { room_id: i64 },
    /// Show the running session for a room.
    State { room_id: i64 },
    /// Advance the session to the next question.
    NextQuestion { room_id: i64 },
    /// Pause the running session.
    Pause { room_id: i64 },
    /// Resume a paused session.
    Resume { room_id: i64 },
    /// Skip the current question.
    Skip { room_id: i64 },
    /// Show per-question results for a session.
    Results { room_id: i64 },
    /// Show a room's leaderboard.
    Leaderboard { room_id: i64 },
    /// Show the post-game summary for a room.
    Summary { room_id: i64 },
    /// Submit a single-player answer.
    SoloAnswer {
        question_id: i64,
        answer: String,
        #[arg(long, default_value_t = 0)]
        time_taken: u32,
    },
    /// Show your single-player progress.
    Progress,
    /// Show your single-player statistics.
    Stats,
    /// Show the global single-player leaderboard.
    TopScores {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "elg_client=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let api = Api::new(args.api_url)?;
    let credentials = FsCredentials::new(&args.data_dir);
    let mut store = Store::new(api.clone(), credentials);
    store.restore();

    match args.command {
        Command::Login { email, password } => {
            store.navigate(Route::Login);
            if !store.login(email, password).await {
                bail_slice(store.auth.error.as_deref())?;
            }
            if let Some(user) = &store.auth.user {
                println!("Signed in as {} <{}>", user.name, user.email);
            }
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            store.navigate(Route::Register);
            let form = RegisterForm {
                name,
                email,
                password_confirmation: password.clone(),
                password,
            };
            if !store.register(form).await {
                bail_slice(store.auth.error.as_deref())?;
            }
            if let Some(user) = &store.auth.user {
                println!("Account created for {} <{}>", user.name, user.email);
            }
        }
        Command::Logout => {
            store.logout().await;
            println!("Signed out");
        }
        Command::Profile => {
            store.navigate(Route::Profile);
            store.fetch_profile().await;
            bail_slice(store.auth.error.as_deref())?;
            if let Some(user) = &store.auth.user {
                println!("{} <{}>", user.name, user.email);
                println!("Level {} - {} points", user.level, user.score);
            }
        }
        Command::Categories => {
            store.navigate(Route::Home);
            store.fetch_categories().await;
            bail_slice(store.game.categories_error.as_deref())?;
            for category in &store.game.categories {
                println!(
                    "#{} {} ({}) - {}",
                    category.id,
                    category.name,
                    category.difficulty_label(),
                    category.description
                );
            }
        }
        Command::Category { id, limit } => {
            store.navigate(Route::Home);
            let category = api.category(id).await?;
            println!(
                "#{} {} ({}) - {}",
                category.id,
                category.name,
                category.difficulty_label(),
                category.description
            );
            for question in api.category_questions(id, limit).await? {
                println!("  [{}] {}", question.question_type, question.question_text);
            }
        }
        Command::Questions {
            category_id,
            question_type,
            limit,
        } => {
            store.navigate(Route::Home);
            let filter = QuestionFilter {
                category_id,
                question_type: question_type.as_deref().map(parse_kind).transpose()?,
                limit,
            };
            for question in api.questions(&filter).await? {
                println!(
                    "#{} [{}] ({}) {}",
                    question.id,
                    question.question_type,
                    question.difficulty_label(),
                    question.question_text
                );
            }
        }
        Command::Random { category_id } => {
            store.navigate(Route::Home);
            let question = api.random_question(category_id, None).await?;
            print_question(&question);
        }
        Command::Question { id } => {
            store.navigate(Route::Home);
            let question = api.question(id).await?;
            print_question(&question);
        }
        Command::Rooms {
            status,
            category_id,
            limit,
        } => {
            store.navigate(Route::Lobby);
            let filter = RoomFilter {
                status: status.as_deref().map(parse_status).transpose()?,
                category_id,
                limit,
            };
            store.fetch_game_rooms(filter).await;
            bail_slice(store.game.rooms_error.as_deref())?;
            if store.game.rooms.is_empty() {
                println!("No game rooms available");
            }
            for room in &store.game.rooms {
                let mut notes = String::new();
                if room.is_private {
                    notes.push_str(" [private]");
                }
                if room.is_full() {
                    notes.push_str(" [full]");
                }
                println!(
                    "#{} {} [{}] {}{}",
                    room.id,
                    room.name,
                    room.status,
                    room.occupancy(),
                    notes
                );
            }
        }
        Command::CreateRoom {
            name,
            description,
            category_id,
            max_players,
            question_count,
            private,
            password,
        } => {
            store.navigate(Route::Lobby);
            let form = CreateRoomForm {
                name,
                description,
                category_id,
                max_players,
                question_count,
                is_private: private,
                password,
            };
            match store.create_game_room(form).await {
                Some(id) => {
                    store.navigate(Route::Room(id));
                    println!("Created room #{id}");
                }
                None => bail_slice(store.game.game_error.as_deref())?,
            }
        }
        Command::Join { room_id, password } => {
            store.navigate(Route::Lobby);
            let form = password.map(|password| JoinRoomForm {
                room_id,
                password: Some(password),
            });
            if !store.join_game_room(room_id, form).await {
                bail_slice(store.game.game_error.as_deref())?;
            }
            store.navigate(Route::Room(room_id));
            print_room(&store);
        }
        Command::FindRoom { code } => {
            store.navigate(Route::Lobby);
            let room = api.find_room_by_code(&code).await?;
            println!(
                "#{} {} [{}] {}",
                room.id,
                room.name,
                room.status,
                room.occupancy()
            );
        }
        Command::Leave { room_id } => {
            store.navigate(Route::Room(room_id));
            store.leave_game_room(room_id).await;
            bail_slice(store.game.game_error.as_deref())?;
            println!("Left room #{room_id}");
        }
        Command::Ready { room_id } => {
            store.navigate(Route::Room(room_id));
            store.toggle_ready(room_id).await;
            bail_slice(store.game.game_error.as_deref())?;
            print_room(&store);
        }
        Command::Start { room_id } => {
            store.navigate(Route::Room(room_id));
            if !store.start_game(room_id).await {
                bail_slice(store.game.game_error.as_deref())?;
            }
            if let Some(session) = &store.game.session {
                println!("Game started: {}", session.progress_label());
            }
        }
        Command::Answer {
            room_id,
            question_id,
            answer,
            time_taken,
        } => {
            store.navigate(Route::Room(room_id));
            store
                .submit_answer(
                    room_id,
                    SubmitAnswerForm {
                        question_id,
                        user_answer: answer,
                        time_taken,
                    },
                )
                .await;
            bail_slice(store.game.game_error.as_deref())?;
            println!("Answer submitted");
        }
        Command::EndGame { room_id } => {
            store.navigate(Route::Room(room_id));
            api.end_game(room_id).await?;
            println!("Game ended in room #{room_id}");
        }
        Command::State { room_id } => {
            store.navigate(Route::Room(room_id));
            store.refresh_game_state(room_id).await;
            bail_slice(store.game.game_error.as_deref())?;
            if let Some(session) = &store.game.session {
                println!("[{}] {}", session.status, session.progress_label());
            }
        }
        Command::NextQuestion { room_id } => {
            store.navigate(Route::Room(room_id));
            api.next_question(room_id).await?;
            store.refresh_game_state(room_id).await;
            bail_slice(store.game.game_error.as_deref())?;
            if let Some(session) = &store.game.session {
                println!("{}", session.progress_label());
            }
        }
        Command::Pause { room_id } => {
            store.navigate(Route::Room(room_id));
            api.pause_game(room_id).await?;
            println!("Session paused");
        }
        Command::Resume { room_id } => {
            store.navigate(Route::Room(room_id));
            api.resume_game(room_id).await?;
            println!("Session resumed");
        }
        Command::Skip { room_id } => {
            store.navigate(Route::Room(room_id));
            api.skip_question(room_id).await?;
            println!("Question skipped");
        }
        Command::Results { room_id } => {
            store.navigate(Route::Room(room_id));
            for answer in api.question_results(room_id).await? {
                let mark = if answer.is_correct { "correct" } else { "wrong" };
                let who = answer
                    .member
                    .as_ref()
                    .map(|m| m.name.as_str())
                    .unwrap_or("(unknown)");
                println!(
                    "Q{} {who}: \"{}\" - {mark}, +{} in {}s",
                    answer.question_id, answer.user_answer, answer.score_earned, answer.time_taken
                );
            }
        }
        Command::Leaderboard { room_id } => {
            store.navigate(Route::Room(room_id));
            let scores = api.room_leaderboard(room_id).await?;
            print_scores(&scores);
        }
        Command::Summary { room_id } => {
            store.navigate(Route::Room(room_id));
            let summary = api.game_summary(room_id).await?;
            println!(
                "[{}] {} questions",
                summary.session.status, summary.session.total_questions
            );
            print_scores(&summary.scores);
        }
        Command::SoloAnswer {
            question_id,
            answer,
            time_taken,
        } => {
            store.navigate(Route::Home);
            api.submit_solo_answer(&SubmitAnswerForm {
                question_id,
                user_answer: answer,
                time_taken,
            })
            .await?;
            println!("Answer submitted");
        }
        Command::Progress => {
            store.navigate(Route::Profile);
            let progress = api.progress().await?;
            println!(
                "{}/{} correct - Level {} ({}/{} XP)",
                progress.correct_answers,
                progress.total_answered,
                progress.level,
                progress.experience,
                progress.next_level_exp
            );
        }
        Command::Stats => {
            store.navigate(Route::Profile);
            let stats = api.stats().await?;
            println!("Level {} - {} points", stats.level, stats.total_score);
            println!(
                "{} games, {} won ({:.1}% win rate)",
                stats.total_games,
                stats.games_won,
                stats.win_rate()
            );
            println!(
                "Average {:.1}, best {}, accuracy {:.1}%",
                stats.average_score, stats.best_score, stats.accuracy
            );
        }
        Command::TopScores { limit } => {
            store.navigate(Route::Home);
            let scores = api.leaderboard(limit).await?;
            print_scores(&scores);
        }
    }

    Ok(())
}

fn print_question(question: &Question) {
    println!(
        "#{} [{}] ({}) {}",
        question.id,
        question.question_type,
        question.difficulty_label(),
        question.question_text
    );
    if let Some(options) = &question.options {
        for option in options {
            println!("  - {option}");
        }
    }
}

fn parse_kind(value: &str) -> Result<QuestionKind> {
    match value {
        "multiple_choice" => Ok(QuestionKind::MultipleChoice),
        "fill_blank" => Ok(QuestionKind::FillBlank),
        other => bail!("unknown question type '{other}' (expected multiple_choice or fill_blank)"),
    }
}

fn parse_status(value: &str) -> Result<RoomStatus> {
    match value {
        "waiting" => Ok(RoomStatus::Waiting),
        "playing" => Ok(RoomStatus::Playing),
        "finished" => Ok(RoomStatus::Finished),
        other => bail!("unknown room status '{other}' (expected waiting, playing or finished)"),
    }
}

fn bail_slice(error: Option<&str>) -> Result<()> {
    match error {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}

fn print_scores(scores: &[PlayerScore]) {
    if scores.is_empty() {
        println!("No scores yet");
        return;
    }
    for (rank, entry) in scores.iter().enumerate() {
        println!(
            "{:>2}. {} - {} points ({} of {} correct)",
            rank + 1,
            entry.player_name,
            entry.score,
            entry.correct_answers,
            entry.total_answers
        );
    }
}

fn print_room(store: &Store) {
    let Some(room) = &store.game.current_room else {
        return;
    };

    println!("#{} {} [{}] {}", room.id, room.name, room.status, room.occupancy());
    let me = store.auth.user.as_ref().map(|u| u.id);
    for player in room.players() {
        let name = player
            .member
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or("(unknown)");
        let owner = if room.is_owner(player.member_id) { " (owner)" } else { "" };
        let ready = if player.is_ready { "Ready" } else { "Not Ready" };
        println!("  {name}{owner} - {ready}");
    }
    if let Some(me) = me {
        let mine = if room.player_ready(me) { "Ready" } else { "Not Ready" };
        println!("Your status: {mine}");
        if room.can_start(me) {
            println!("All players ready - the game can start");
        }
    }
}
