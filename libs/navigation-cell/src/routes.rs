use shared_models::Role;

/// Every screen the client can land on. Deep-link parameters travel inside
/// the route value itself, never through ambient globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    ResetPassword { token: String, email: String },
    AdminDashboard,
    DoctorDashboard,
    PacienteDashboard,
    Citas,
    CitaDetalle { cita_id: i64 },
    MisCitas,
    Doctores,
    Horario,
    Pacientes,
    Eps,
    Especialidades,
    Usuarios,
    Perfil,
}

impl Route {
    /// Reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::ResetPassword { .. })
    }
}

/// Dashboard a freshly authenticated user starts on.
pub fn initial_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Doctor => Route::DoctorDashboard,
        Role::Paciente => Route::PacienteDashboard,
    }
}

/// Role guard for in-app navigation.
pub fn can_access(role: Role, route: &Route) -> bool {
    if route.is_public() {
        return true;
    }

    match route {
        Route::Perfil | Route::CitaDetalle { .. } => true,
        Route::AdminDashboard
        | Route::Citas
        | Route::Doctores
        | Route::Pacientes
        | Route::Eps
        | Route::Especialidades
        | Route::Usuarios => role == Role::Admin,
        Route::DoctorDashboard | Route::Horario => role == Role::Doctor,
        Route::PacienteDashboard => role == Role::Paciente,
        Route::MisCitas => matches!(role, Role::Doctor | Role::Paciente),
        Route::Login | Route::ResetPassword { .. } => true,
    }
}
