use std::sync::Arc;

use futures::try_join;
use tracing::info;

use appointment_cell::CitaClient;
use catalog_cell::{EpsClient, EspecialidadClient};
use doctor_cell::DoctorClient;
use navigation_cell::{initial_route, Route};
use patient_cell::PacienteClient;
use shared_http::ApiClient;
use shared_models::User;

/// Fetch and print the dashboard matching the user's role.
pub async fn show(api: Arc<ApiClient>, user: &User) -> anyhow::Result<()> {
    match initial_route(user.role) {
        Route::AdminDashboard => admin(api).await,
        Route::DoctorDashboard => doctor(api).await,
        Route::PacienteDashboard => paciente(api).await,
        _ => Ok(()),
    }
}

/// Admin overview: reference data and doctors, fetched concurrently.
async fn admin(api: Arc<ApiClient>) -> anyhow::Result<()> {
    let eps = EpsClient::new(Arc::clone(&api));
    let especialidades = EspecialidadClient::new(Arc::clone(&api));
    let doctores = DoctorClient::new(Arc::clone(&api));
    let pacientes = PacienteClient::new(Arc::clone(&api));

    let (eps, especialidades, doctores, pacientes) = try_join!(
        eps.list(),
        especialidades.list(),
        doctores.list(),
        pacientes.list(),
    )?;

    info!("EPS registradas: {}", eps.len());
    info!("Especialidades: {}", especialidades.len());
    info!("Doctores: {}", doctores.len());
    info!("Pacientes: {}", pacientes.len());

    Ok(())
}

async fn doctor(api: Arc<ApiClient>) -> anyhow::Result<()> {
    let citas = CitaClient::new(api);

    let agenda = citas.my_citas_doctor().await?;
    info!("Citas asignadas: {}", agenda.len());
    for cita in &agenda {
        info!("  {} {} — paciente {} ({})", cita.fecha, cita.hora, cita.pacientes_id, cita.status);
    }

    Ok(())
}

async fn paciente(api: Arc<ApiClient>) -> anyhow::Result<()> {
    let citas = CitaClient::new(Arc::clone(&api));
    let doctores = DoctorClient::new(api);

    let mias = citas.my_citas().await?;
    info!("Mis citas: {}", mias.len());
    for cita in &mias {
        info!("  {} {} — doctor {} ({})", cita.fecha, cita.hora, cita.doctor_id, cita.status);
    }

    let disponibles = doctores.list().await?;
    info!("Doctores disponibles: {}", disponibles.len());

    Ok(())
}
