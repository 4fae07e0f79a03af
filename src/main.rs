use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use student_form::api::{HttpStudentService, StudentId};
use student_form::config::Config;
use student_form::store::auth::{AuthIntent, AuthReducer};
use student_form::store::example::{ExampleAction, ExampleReducer};
use student_form::store::Store;
use student_form::ui::history::History;
use student_form::ui::student::{Field, FormContext, LoadOutcome, StudentForm, SubmitOutcome};
use student_form::ui::toast::{ToastKind, ToastLog};

#[derive(Debug, Parser)]
#[command(name = "student-form", version, about = "Create and edit student records")]
struct Cli {
    /// Config file (default: ~/.config/student-form/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token for the API
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a student and print its fields
    Show { id: String },
    /// Create a new student
    New(FieldArgs),
    /// Load a student, apply the given fields and save
    Edit {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Run action types through the example reducer and print the result
    Example {
        /// Action types, e.g. BOTAO_CLICADO_SUCCESS
        actions: Vec<String>,
    },
}

#[derive(Debug, Args)]
struct FieldArgs {
    #[arg(long)]
    nome: Option<String>,
    #[arg(long)]
    sobrenome: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    idade: Option<String>,
    #[arg(long)]
    peso: Option<String>,
    #[arg(long)]
    altura: Option<String>,
}

impl FieldArgs {
    fn apply(self, form: &mut StudentForm) {
        let values = [
            (Field::FirstName, self.nome),
            (Field::LastName, self.sobrenome),
            (Field::Email, self.email),
            (Field::Age, self.idade),
            (Field::Weight, self.peso),
            (Field::Height, self.altura),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
    }
}

/// Collaborators kept around so the outcome can be reported.
struct Session {
    ctx: FormContext,
    history: Arc<History>,
    toasts: Arc<ToastLog>,
    auth: Store<AuthReducer>,
    logged_in: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match run(cli, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.api.token = Some(token.clone());
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, config: Config) -> Result<bool> {
    match cli.command {
        Command::Example { actions } => {
            run_example(&actions);
            Ok(true)
        }
        Command::Show { id } => {
            let session = session(&config)?;
            let form = StudentForm::mount(session.ctx.clone(), Some(parse_id(&id)?)).await;
            let loaded = session.history.entries().is_empty();
            if loaded {
                print_form(&form);
            }
            report(&session);
            Ok(loaded)
        }
        Command::New(fields) => {
            let session = session(&config)?;
            let mut form = StudentForm::mount(session.ctx.clone(), None).await;
            fields.apply(&mut form);
            let outcome = form.submit().await;
            report(&session);
            Ok(matches!(outcome, SubmitOutcome::Created(_)))
        }
        Command::Edit { id, fields } => {
            let session = session(&config)?;
            let mut form = StudentForm::new(session.ctx.clone());
            if form.set_route_id(Some(parse_id(&id)?)).await == LoadOutcome::Failed {
                report(&session);
                return Ok(false);
            }
            fields.apply(&mut form);
            let outcome = form.submit().await;
            report(&session);
            Ok(outcome == SubmitOutcome::Updated)
        }
    }
}

fn session(config: &Config) -> Result<Session> {
    let auth: Store<AuthReducer> = Store::new();
    if let Some(token) = &config.api.token {
        auth.dispatch(AuthIntent::LoginSuccess {
            token: token.clone(),
        });
    }

    let service = HttpStudentService::new(&config.api)
        .context("Failed to set up API client")?
        .with_token(auth.token());
    let history = Arc::new(History::new());
    let toasts = Arc::new(ToastLog::new());

    let ctx = FormContext {
        service: Arc::new(service),
        navigator: history.clone(),
        notifier: toasts.clone(),
        auth: Arc::new(auth.clone()),
    };

    let logged_in = auth.state().is_logged_in;
    Ok(Session {
        ctx,
        history,
        toasts,
        auth,
        logged_in,
    })
}

fn parse_id(raw: &str) -> Result<StudentId> {
    match StudentId::new(raw) {
        Some(id) => Ok(id),
        None => bail!("Student id must not be empty"),
    }
}

fn run_example(actions: &[String]) {
    let store: Store<ExampleReducer> = Store::new();
    for action in actions {
        store.dispatch(ExampleAction::from_type(action));
    }
    println!("clicked = {}", store.state().clicked);
}

fn print_form(form: &StudentForm) {
    println!("{}", form.title());
    if let Some(id) = form.id() {
        println!("  {:<10} {}", "Id:", id);
    }
    for field in Field::ALL {
        println!("  {:<10} {}", format!("{}:", field.label()), form.fields().get(field));
    }
    if !form.photo().is_empty() {
        println!("  {:<10} {}", "Foto:", form.photo());
    }
}

fn report(session: &Session) {
    for toast in session.toasts.drain() {
        match toast.kind {
            ToastKind::Success => println!("✔ {}", toast.message),
            ToastKind::Error => eprintln!("✘ {}", toast.message),
        }
    }
    if let Some(location) = session.history.entries().last() {
        println!("→ {}", location);
    }
    if session.logged_in && !session.auth.state().is_logged_in {
        eprintln!("Session expired; log in again.");
    }
}
