pub mod fornecedor;
pub mod funcionario;
pub mod material;
pub mod orcamento;
pub mod page;
pub mod record;
