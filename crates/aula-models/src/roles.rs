//! Login roles and their profile table.
//!
//! Each [`Role`] maps to exactly one [`RoleProfile`] describing which form
//! fields the card shows, which validation rule applies, where a successful
//! login navigates, and the copy a rendering surface needs for the card.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::login::{
    AccountCredentials, Credentials, FormField, FormState, Navigation, NavigationState, Route,
    StudentLookup,
};

/// One of the four user categories offered by the login modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// All roles in the order the modal presents them.
    pub const ALL: [Role; 4] = [Role::Parent, Role::Student, Role::Teacher, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    pub fn profile(&self) -> &'static RoleProfile {
        match self {
            Role::Parent => &PARENT,
            Role::Student => &STUDENT,
            Role::Teacher => &TEACHER,
            Role::Admin => &ADMIN,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parent" => Ok(Role::Parent),
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Which credential shape a role submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// A child's code or name, used by parents.
    StudentLookup,
    /// Identifier and password.
    Account,
}

/// Button style hint for the card's submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonVariant {
    AcademicYellow,
    Secondary,
    Academic,
    Default,
}

/// A visible input on a login card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FormField,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Rendered as a masked input.
    pub secret: bool,
}

/// Everything that varies between login cards.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: Role,
    pub title: &'static str,
    pub description: &'static str,
    pub credential_kind: CredentialKind,
    pub fields: &'static [FieldSpec],
    pub button_variant: ButtonVariant,
    pub shows_forgot_password: bool,
}

impl RoleProfile {
    /// The fields this role requires, in display order.
    pub fn required_fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.fields.iter().map(|spec| spec.field)
    }

    /// Project a form onto the credentials this role submits.
    ///
    /// Fields the role does not use are ignored. Values are trimmed copies.
    pub fn collect(&self, state: &FormState) -> Credentials {
        match self.credential_kind {
            CredentialKind::StudentLookup => Credentials::StudentLookup(StudentLookup {
                student_code: state.student_code.trim().to_string(),
            }),
            CredentialKind::Account => Credentials::Account(AccountCredentials {
                identifier: state.identifier.trim().to_string(),
                password: state.password.trim().to_string(),
            }),
        }
    }

    /// Where a successful login for this role goes.
    pub fn navigation(&self) -> Navigation {
        match self.role {
            Role::Student => Navigation::to(Route::StudentDashboard),
            Role::Teacher => Navigation::with_state(
                Route::LevelSelection,
                NavigationState { role: Role::Teacher },
            ),
            Role::Parent => Navigation::to(Route::ParentDashboard),
            Role::Admin => Navigation::to(Route::AdminDashboard),
        }
    }
}

const PASSWORD_FIELD: FieldSpec = FieldSpec {
    field: FormField::Password,
    label: "Contraseña",
    placeholder: "••••••••",
    secret: true,
};

static PARENT: RoleProfile = RoleProfile {
    role: Role::Parent,
    title: "Padres/Tutores",
    description: "Consulta la información académica de tu hijo",
    credential_kind: CredentialKind::StudentLookup,
    fields: &[FieldSpec {
        field: FormField::StudentCode,
        label: "Código o Nombre del Estudiante",
        placeholder: "Ej: EST-2025-001 o Juan Pérez",
        secret: false,
    }],
    button_variant: ButtonVariant::AcademicYellow,
    shows_forgot_password: false,
};

static STUDENT: RoleProfile = RoleProfile {
    role: Role::Student,
    title: "Estudiantes",
    description: "Revisa tus notas, tareas y avances",
    credential_kind: CredentialKind::Account,
    fields: &[
        FieldSpec {
            field: FormField::Identifier,
            label: "Código de Estudiante",
            placeholder: "Ej: EST-2025-001",
            secret: false,
        },
        PASSWORD_FIELD,
    ],
    button_variant: ButtonVariant::Secondary,
    shows_forgot_password: true,
};

static TEACHER: RoleProfile = RoleProfile {
    role: Role::Teacher,
    title: "Docentes",
    description: "Gestiona notas, tareas y observaciones",
    credential_kind: CredentialKind::Account,
    fields: &[
        FieldSpec {
            field: FormField::Identifier,
            label: "Usuario Docente",
            placeholder: "Ingresa tu usuario",
            secret: false,
        },
        PASSWORD_FIELD,
    ],
    button_variant: ButtonVariant::Academic,
    shows_forgot_password: true,
};

static ADMIN: RoleProfile = RoleProfile {
    role: Role::Admin,
    title: "Administrador",
    description: "Administra el sistema académico",
    credential_kind: CredentialKind::Account,
    fields: &[
        FieldSpec {
            field: FormField::Identifier,
            label: "Usuario Administrador",
            placeholder: "Ingresa tu usuario",
            secret: false,
        },
        PASSWORD_FIELD,
    ],
    button_variant: ButtonVariant::Default,
    shows_forgot_password: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_matches_role() {
        for role in Role::ALL {
            assert_eq!(role.profile().role, role);
        }
    }

    #[test]
    fn test_required_fields() {
        let parent: Vec<_> = Role::Parent.profile().required_fields().collect();
        assert_eq!(parent, vec![FormField::StudentCode]);

        for role in [Role::Student, Role::Teacher, Role::Admin] {
            let fields: Vec<_> = role.profile().required_fields().collect();
            assert_eq!(fields, vec![FormField::Identifier, FormField::Password]);
        }
    }

    #[test]
    fn test_navigation_targets() {
        assert_eq!(
            Role::Student.profile().navigation(),
            Navigation::to(Route::StudentDashboard)
        );
        assert_eq!(
            Role::Parent.profile().navigation(),
            Navigation::to(Route::ParentDashboard)
        );
        assert_eq!(
            Role::Admin.profile().navigation(),
            Navigation::to(Route::AdminDashboard)
        );

        let teacher = Role::Teacher.profile().navigation();
        assert_eq!(teacher.route.path(), "/seleccionar-nivel");
        assert_eq!(teacher.state, Some(NavigationState { role: Role::Teacher }));
    }

    #[test]
    fn test_forgot_password_hidden_for_parent() {
        assert!(!Role::Parent.profile().shows_forgot_password);
        assert!(Role::Student.profile().shows_forgot_password);
        assert!(Role::Teacher.profile().shows_forgot_password);
        assert!(Role::Admin.profile().shows_forgot_password);
    }

    #[test]
    fn test_collect_ignores_unused_fields() {
        let state = FormState {
            identifier: "should-not-appear".to_string(),
            password: "secret".to_string(),
            student_code: "  EST-2025-001 ".to_string(),
        };

        assert_eq!(
            Role::Parent.profile().collect(&state),
            Credentials::StudentLookup(StudentLookup {
                student_code: "EST-2025-001".to_string()
            })
        );
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Parent).unwrap(), "\"parent\"");
    }
}
