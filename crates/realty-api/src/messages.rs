//! User-facing message catalogue (pt-BR)

use serde::Serialize;

pub const NOT_AUTHORIZED: &str = "Não autorizado";
pub const AUTHENTICATION_REQUIRED: &str = "Autenticação necessária";
pub const DUPLICATE_EMAIL: &str = "Usuário já cadastrado";
pub const PROPERTY_DELETED: &str = "Imóvel excluído";
pub const USER_DELETED: &str = "Usuário excluído";

/// Every operation exposed over HTTP; each has one fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    PropertyList,
    PropertyCreate,
    PropertyShow,
    PropertyUpdate,
    PropertyDelete,
    UserList,
    UserCreate,
    UserShow,
    UserUpdate,
    UserDelete,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::PropertyList => "Falha ao listar os imóveis!",
            Operation::PropertyCreate => "Falha ao cadastrar o imóvel!",
            Operation::PropertyShow => "Falha ao exibir o imóvel!",
            Operation::PropertyUpdate => "Falha ao atualizar o imóvel!",
            Operation::PropertyDelete => "Falha ao excluir o imóvel!",
            Operation::UserList => "Falha ao listar os usuários!",
            Operation::UserCreate => "Falha ao registrar o usuário!",
            Operation::UserShow => "Falha ao listar o usuário!",
            Operation::UserUpdate => "Falha ao alterar o usuário!",
            Operation::UserDelete => "Falha ao excluir o usuário!",
        }
    }
}
