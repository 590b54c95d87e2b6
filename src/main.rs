use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gacha::build_info;
use gacha::core::constants::{
    LOG_FILE_NAME, MAX_BUDGET, MIN_BUDGET, SPIN_DELAY_MS, UI_POLL_INTERVAL_MS,
};
use gacha::draw::RngSource;
use gacha::input::{handle_gacha_key, handle_setup_key, InputAction, UiState};
use gacha::storage::{default_data_dir, JsonFileStore};
use gacha::ui::{draw_ui, GachaView};
use gacha::{GachaConfig, GachaMachine, WeightTable};
use log::{debug, error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Gacha - Terminal Loot-Box Simulator
#[derive(Debug, Parser)]
#[command(name = "gacha", disable_version_flag = true)]
struct Cli {
    /// Directory holding the saved session and log
    #[arg(long, env = "GACHA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON weight table to use instead of the built-in one
    #[arg(long, env = "GACHA_TABLE")]
    table: Option<PathBuf>,

    /// Largest budget the setup screen accepts
    #[arg(long, default_value_t = MAX_BUDGET,
          value_parser = clap::value_parser!(u32).range(MIN_BUDGET as i64..=MAX_BUDGET as i64))]
    max_budget: u32,

    /// Suspense delay before a draw is revealed
    #[arg(long, default_value_t = SPIN_DELAY_MS)]
    spin_delay_ms: u64,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

impl Cli {
    fn to_config(&self) -> GachaConfig {
        GachaConfig {
            max_budget: self.max_budget,
            spin_delay: Duration::from_millis(self.spin_delay_ms),
            data_dir: self.data_dir.clone(),
            table_path: self.table.clone(),
            ..Default::default()
        }
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Logs go to a file so they never land on the alternate screen.
fn init_logging(data_dir: &Path) {
    let path = data_dir.join(LOG_FILE_NAME);
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Logging disabled, cannot open {}: {}", path.display(), e),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line("gacha"));
        return Ok(());
    }

    let config = cli.to_config();
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    std::fs::create_dir_all(&data_dir)?;
    init_logging(&data_dir);
    info!("{}", build_info::version_line("gacha"));

    let table = match &config.table_path {
        Some(path) => match WeightTable::load(path) {
            Ok(table) => {
                info!("Loaded weight table from {}", path.display());
                table
            }
            Err(e) => {
                error!("Weight table {} rejected: {}", path.display(), e);
                eprintln!("Cannot use weight table {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => WeightTable::reference(),
    };

    let store = JsonFileStore::in_dir(&data_dir)?;
    let mut machine = GachaMachine::open(store, table, Box::new(RngSource::thread()), config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut machine);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Terminal loop failed: {e}");
    }
    result.map_err(Into::into)
}

fn run(terminal: &mut Tui, machine: &mut GachaMachine<JsonFileStore>) -> io::Result<()> {
    let mut ui = UiState::new();
    if machine.recovered_from_corrupt() {
        ui.validation_error = Some("Saved progress was unreadable and has been reset.".to_string());
    }

    loop {
        let now = Instant::now();
        if let Some(result) = machine.poll_spin(now) {
            match result {
                Ok(item) => ui.show_result(item),
                Err(e) => ui.status = Some(e.to_string()),
            }
        }

        let view = GachaView {
            session: machine.session(),
            table: machine.table(),
            spin_progress: machine.spin_progress(now),
        };
        terminal.draw(|frame| draw_ui(frame, &view, &mut ui, machine.config()))?;

        if !event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = if machine.session().is_configured() {
            handle_gacha_key(&mut ui, key, machine.can_draw())
        } else {
            handle_setup_key(&mut ui, key, machine.config())
        };

        match action {
            InputAction::Continue => {}
            InputAction::Quit => break,
            InputAction::Configure(budget) => match machine.configure(budget as i64) {
                Ok(_) => ui.validation_error = None,
                Err(e) => ui.validation_error = Some(e.to_string()),
            },
            InputAction::Draw => match machine.begin_spin(Instant::now()) {
                Ok(()) => ui.status = None,
                // Draw button is already greyed out for these
                Err(e) if e.blocks_drawing() => debug!("Draw ignored: {e}"),
                Err(e) => ui.status = Some(e.to_string()),
            },
            InputAction::Reset => match machine.reset() {
                Ok(_) => ui = UiState::new(),
                Err(e) => ui.status = Some(e.to_string()),
            },
        }
    }

    // A started draw is never cancelled; let it land before exiting.
    if machine.is_spinning() {
        std::thread::sleep(machine.config().spin_delay);
        if let Some(Err(e)) = machine.poll_spin(Instant::now()) {
            error!("Pending draw could not be saved: {e}");
        }
    }

    Ok(())
}
