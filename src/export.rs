use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use sea_orm::ActiveEnum;
use crate::entity::inventory::Model as InventoryModel;

pub const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Encabezados de la hoja: los nombres de columna de la tabla `inventario`.
pub const INVENTORY_HEADERS: [&str; 11] = [
    "id",
    "codigo_equipo",
    "tipo_equipo",
    "marca",
    "modelo",
    "numero_serie",
    "ubicacion",
    "estado",
    "responsable",
    "fecha_adquisicion",
    "observaciones",
];

/// `inventario_ti_YYYYMMDD.xlsx`
pub fn inventory_file_name(day: NaiveDate) -> String {
    format!("inventario_ti_{}.xlsx", day.format("%Y%m%d"))
}

/// Vuelca el inventario a un libro xlsx: una fila de encabezados y una fila
/// por equipo, en el orden recibido.
pub fn inventory_to_xlsx(items: &[InventoryModel]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("inventario")?;

    let header = Format::new().set_bold();
    for (col, title) in INVENTORY_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (index, item) in items.iter().enumerate() {
        let row = index as u32 + 1;
        let acquired = item.acquired_on.map(|d| d.format("%Y-%m-%d").to_string());
        let cells = [
            item.code.clone(),
            item.equipment_type.to_value(),
            item.brand.clone(),
            item.model_name.clone(),
            item.serial_number.clone().unwrap_or_default(),
            item.location.clone(),
            item.status.to_value(),
            item.responsible.clone().unwrap_or_default(),
            acquired.unwrap_or_default(),
            item.observations.clone().unwrap_or_default(),
        ];

        worksheet.write_number(row, 0, item.id as f64)?;
        for (offset, value) in cells.iter().enumerate() {
            worksheet.write_string(row, offset as u16 + 1, value)?;
        }
    }

    worksheet.autofit();
    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use calamine::{Data, Reader, Xlsx};
    use crate::entity::inventory::{EquipmentStatus, EquipmentType};

    #[test]
    fn file_name_embeds_the_date() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(inventory_file_name(day), "inventario_ti_20250307.xlsx");
    }

    fn read_rows(bytes: Vec<u8>) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("inventario").unwrap();
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::Empty => String::new(),
                        Data::String(s) => s.clone(),
                        Data::Float(f) => f.to_string(),
                        Data::Int(i) => i.to_string(),
                        other => format!("{:?}", other),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn header_row_then_one_row_per_item() {
        let items = vec![InventoryModel {
            id: 1,
            code: "PC-LAB-001".to_string(),
            equipment_type: EquipmentType::Desktop,
            brand: "HP".to_string(),
            model_name: "EliteDesk 800".to_string(),
            serial_number: Some("HP001234".to_string()),
            location: "Laboratorio 1".to_string(),
            status: EquipmentStatus::Active,
            responsible: None,
            acquired_on: NaiveDate::from_ymd_opt(2023, 1, 15),
            observations: None,
        }];

        let bytes = inventory_to_xlsx(&items).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let rows = read_rows(bytes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], INVENTORY_HEADERS.map(String::from).to_vec());
        assert_eq!(
            rows[1],
            vec!["1", "PC-LAB-001", "Desktop", "HP", "EliteDesk 800", "HP001234", "Laboratorio 1", "Activo", "", "2023-01-15", ""]
        );
    }

    #[test]
    fn empty_inventory_still_has_headers() {
        let rows = read_rows(inventory_to_xlsx(&[]).unwrap());

        assert_eq!(rows, vec![INVENTORY_HEADERS.map(String::from).to_vec()]);
    }
}
