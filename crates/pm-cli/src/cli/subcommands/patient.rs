use clap::{Args, Subcommand};

/// Patient records.
#[derive(Clone, Debug, Subcommand)]
pub enum PatientCommands {
    /// List all patients.
    List,
    /// Register a new patient.
    Create(PatientCreateArgs),
    /// Update a patient; omitted fields keep their current values.
    Update(PatientUpdateArgs),
    /// Delete a patient.
    Delete(PatientDeleteArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PatientCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub address: String,
    /// Date of birth, YYYY-MM-DD.
    #[arg(long = "dob")]
    pub date_of_birth: String,
    /// Registration date, YYYY-MM-DD.
    #[arg(long = "registered")]
    pub registered_date: String,
}

#[derive(Clone, Debug, Args)]
pub struct PatientUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long = "dob")]
    pub date_of_birth: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PatientDeleteArgs {
    pub id: String,
    /// Confirm the deletion.
    #[arg(long)]
    pub yes: bool,
}
