use crate::parser::Description;
use crate::types::NtmError;

use std::sync::RwLock;

// Default embedded machines
const MACHINE_TEXTS: [(&str, &str); 4] = [
    ("Ends in one", include_str!("../demos/ends-in-one.ntm")),
    ("Contains 11", include_str!("../demos/contains-11.ntm")),
    ("Even a count", include_str!("../demos/even-a-count.ntm")),
    ("Ping pong", include_str!("../demos/ping-pong.ntm")),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<(String, Description)>> = RwLock::new(Vec::new());
}

pub struct MachineCatalog;

impl MachineCatalog {
    /// Parse the embedded machine texts and populate the registry.
    pub fn load() -> Result<(), NtmError> {
        let mut machines = Vec::new();

        for (name, text) in MACHINE_TEXTS {
            match crate::parser::parse(text) {
                Ok(description) => machines.push((name.to_string(), description)),
                Err(e) => eprintln!("Failed to parse embedded machine '{}': {}", name, e),
            }
        }

        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(NtmError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of available machines
    pub fn count() -> usize {
        // Initialize with default machines if not already initialized
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// Get a machine description by its index
    pub fn get_by_index(index: usize) -> Result<Description, NtmError> {
        // Initialize with default machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .map(|(_, description)| description.clone())
            .ok_or_else(|| {
                NtmError::ValidationError(format!("Machine index {} out of range", index))
            })
    }

    /// Get a machine description by its name
    pub fn get_by_name(name: &str) -> Result<Description, NtmError> {
        // Initialize with default machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|(machine_name, _)| machine_name == name)
            .map(|(_, description)| description.clone())
            .ok_or_else(|| NtmError::ValidationError(format!("Machine '{}' not found", name)))
    }

    /// List all machine names
    pub fn names() -> Vec<String> {
        // Initialize with default machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| machines.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_else(|_| Vec::new())
    }

    /// Get information about a machine by its index
    pub fn info(index: usize) -> Result<MachineInfo, NtmError> {
        let _ = Self::load();

        let guard = MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?;

        let (name, description) = guard.get(index).ok_or_else(|| {
            NtmError::ValidationError(format!("Machine index {} out of range", index))
        })?;

        Ok(MachineInfo {
            index,
            name: name.clone(),
            state_count: description.table.state_count(),
            transition_count: description.table.transition_count(),
            max_steps: description.max_steps,
            input_count: description.inputs.len(),
        })
    }

    /// Get the original text of a machine by its index
    pub fn text_by_index(index: usize) -> Result<&'static str, NtmError> {
        MACHINE_TEXTS
            .get(index)
            .map(|(_, text)| *text)
            .ok_or_else(|| {
                NtmError::ValidationError(format!("Machine text index {} out of range", index))
            })
    }
}

#[derive(Debug, Clone)]
pub struct MachineInfo {
    pub index: usize,
    pub name: String,
    pub state_count: usize,
    pub transition_count: usize,
    pub max_steps: usize,
    pub input_count: usize,
}
