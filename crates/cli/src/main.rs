use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use api_shared::RegisterDoctorReq;
use clinic_core::constants::DEFAULT_CLINIC_DATA_DIR;
use clinic_core::{
    Collection, CoreConfig, DashboardService, Document, DocumentStore, DoctorService,
};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic administration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CollectionArg {
    Patients,
    Doctors,
    Appointments,
    Prescriptions,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::Patients => Collection::Patients,
            CollectionArg::Doctors => Collection::Doctors,
            CollectionArg::Appointments => Collection::Appointments,
            CollectionArg::Prescriptions => Collection::Prescriptions,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all records in a collection
    List {
        /// Collection to list
        #[arg(value_enum)]
        collection: CollectionArg,
    },
    /// Register a doctor
    RegisterDoctor {
        /// Full name
        name: String,
        /// Medical specialization
        specialization: String,
        /// Contact email (optional)
        #[arg(long, default_value = "")]
        email: String,
        /// Contact phone (optional)
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Print the dashboard summary
    Dashboard,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir = std::env::var("CLINIC_DATA_DIR")
        .unwrap_or_else(|_| DEFAULT_CLINIC_DATA_DIR.into());
    let cfg = Arc::new(CoreConfig::new(PathBuf::from(data_dir))?);
    let store = DocumentStore::new(cfg);

    match cli.command {
        Some(Commands::List { collection }) => {
            let collection: Collection = collection.into();
            let documents = store.list_all(collection)?;
            if documents.is_empty() {
                println!("No records found in {}.", collection);
            } else {
                for document in &documents {
                    println!("{}", summarise(document));
                }
            }
        }
        Some(Commands::RegisterDoctor {
            name,
            specialization,
            email,
            phone,
        }) => {
            let service = DoctorService::new(store);
            match service.register(RegisterDoctorReq {
                name,
                specialization,
                email,
                phone,
            }) {
                Ok(id) => println!("Registered doctor with id: {}", id),
                Err(e) => eprintln!("Error registering doctor: {}", e),
            }
        }
        Some(Commands::Dashboard) => {
            let dashboard = DashboardService::new(store);
            let data = dashboard.snapshot()?;

            println!("Patients:      {}", data.stats.total_patients);
            println!("Doctors:       {}", data.stats.total_doctors);
            println!("Appointments:  {}", data.stats.total_appointments);
            println!("Prescriptions: {}", data.stats.total_prescriptions);

            println!("\nSpecializations:");
            for slice in &data.specialty_distribution {
                let label = slice.name.as_deref().unwrap_or("(unspecified)");
                println!("  {}: {}", label, slice.value);
            }

            println!("\nAppointments by month:");
            for bucket in &data.monthly_appointments {
                println!(
                    "  {}: {} total ({} completed, {} cancelled, {} pending)",
                    bucket.month, bucket.total, bucket.completed, bucket.cancelled, bucket.pending
                );
            }

            println!("\nAppointment status:");
            for slice in &data.appointment_status {
                println!("  {}: {}", slice.name, slice.value);
            }
        }
        None => {
            println!("Use 'clinic --help' for commands");
        }
    }

    Ok(())
}

/// One-line summary of a listed document: id plus the fields a staff member
/// would scan for.
fn summarise(document: &Document) -> String {
    let id = document
        .get("id")
        .and_then(|value| value.as_str())
        .unwrap_or("-");

    let mut line = format!("ID: {}", id);
    for name in ["name", "specialization", "appointmentDate", "status"] {
        if let Some(value) = document.get(name).and_then(|value| value.as_str()) {
            line.push_str(&format!(", {}: {}", name, value));
        }
    }
    line
}
