//! Carga de tablas delimitadas
//!
//! Las tablas de referencia son archivos con fila de cabecera y `|`
//! como delimitador de campos. Cualquier fallo de lectura o de parseo
//! aborta la carga completa: no queda estado parcial.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Delimitador convencional de las tablas de referencia.
pub const TABLE_DELIMITER: u8 = b'|';

/// Carga una tabla completa en registros tipados, usando el delimitador `|`.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    load_table_with_delimiter(path, TABLE_DELIMITER)
}

/// Carga una tabla completa con un delimitador explícito.
///
/// El orden de las filas del archivo se preserva en el vector resultante.
pub fn load_table_with_delimiter<T: DeserializeOwned>(
    path: &Path,
    delimiter: u8,
) -> Result<Vec<T>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::Load(format!("{}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let record: T =
            row.map_err(|e| AppError::Load(format!("{}: {}", path.display(), e)))?;
        rows.push(record);
    }

    log::debug!("Tabla cargada: {} ({} filas)", path.display(), rows.len());
    Ok(rows)
}
