//! Menu dispatch loop

use crate::config::Settings;
use crate::console::{Console, ConsoleError};
use crate::scenarios::{
    run_scenario, CastInstance, ConnectDatabase, Divide, IndexArray, NullDereference, OpenFile,
    ParseNumber, ReadFirstLine, ReadPastEnd, ResolveType, Sleep,
};
use crate::value::registry::TypeRegistry;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Menu entries, in display order
pub const MENU_ITEMS: [(u8, &str); 11] = [
    (1, "IoError (e.g., File Reading)"),
    (2, "FileNotFound (e.g., Missing File)"),
    (3, "UnexpectedEof (e.g., Unexpected End of File)"),
    (4, "DatabaseError (e.g., Database Connection)"),
    (5, "SymbolNotFound (e.g., Missing Type)"),
    (6, "DivisionError (e.g., Divide by Zero)"),
    (7, "NullReference (e.g., Null Object Access)"),
    (8, "IndexOutOfBounds (e.g., Invalid Index)"),
    (9, "InvalidCast (e.g., Invalid Type Casting)"),
    (10, "InvalidArgument (e.g., Negative Sleep Time)"),
    (11, "NumberFormat (e.g., Invalid Number Format)"),
];

/// A decoded menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Scenario(u8),
    Invalid(i32),
}

impl From<i32> for Selection {
    fn from(choice: i32) -> Self {
        match choice {
            0 => Selection::Exit,
            1..=11 => Selection::Scenario(choice as u8),
            other => Selection::Invalid(other),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose `0`
    Exit,
    /// The input stream closed at a prompt
    InputClosed,
}

/// One run of the menu loop over one console
pub struct Session<R, W> {
    console: Console<R, W>,
    settings: Settings,
    registry: TypeRegistry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, settings: Settings) -> Self {
        Session {
            console,
            settings,
            registry: TypeRegistry::builtin(),
        }
    }

    /// Replace the registry used by the type resolution scenario
    pub fn with_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Loop until the user exits or the input closes
    pub fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        info!("session started");
        loop {
            match self.step() {
                Ok(Some(end)) => {
                    info!(?end, "session ended");
                    return Ok(end);
                }
                Ok(None) => {}
                Err(ConsoleError::InputClosed) => {
                    info!("input closed, ending session");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One iteration: show the menu, read a choice, dispatch it
    ///
    /// Returns `Some` when the session should end.
    fn step(&mut self) -> Result<Option<SessionEnd>, ConsoleError> {
        self.print_menu()?;
        let prompt = self.settings.menu_prompt.clone();
        let choice: i32 = self.console.prompt_number(&prompt)?;

        match Selection::from(choice) {
            Selection::Exit => {
                self.console.println("Exiting...")?;
                Ok(Some(SessionEnd::Exit))
            }
            Selection::Scenario(n) => {
                debug!(selection = n, "dispatching scenario");
                self.dispatch(n)?;
                Ok(None)
            }
            Selection::Invalid(n) => {
                warn!(selection = n, "invalid menu choice");
                self.console.println("Invalid choice! Try again.")?;
                Ok(None)
            }
        }
    }

    fn dispatch(&mut self, selection: u8) -> Result<(), ConsoleError> {
        let console = &mut self.console;
        match selection {
            1 => run_scenario(&ReadFirstLine, console),
            2 => run_scenario(&OpenFile, console),
            3 => run_scenario(&ReadPastEnd, console),
            4 => run_scenario(&ConnectDatabase, console),
            5 => run_scenario(&ResolveType::new(self.registry.clone()), console),
            6 => run_scenario(&Divide, console),
            7 => run_scenario(&NullDereference, console),
            8 => run_scenario(&IndexArray::new(self.settings.max_array_len), console),
            9 => run_scenario(&CastInstance, console),
            10 => run_scenario(&Sleep, console),
            11 => run_scenario(&ParseNumber, console),
            _ => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<(), ConsoleError> {
        self.console.println("")?;
        self.console.heading("=== Fault Handling Tester ===")?;
        self.console.println("Choose a fault to simulate:")?;
        for (n, label) in MENU_ITEMS {
            self.console.println(&format!("{}. {}", n, label))?;
        }
        self.console.println("0. Exit")
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
