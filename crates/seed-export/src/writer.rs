//! CSV serialization of projected rows.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::Writer;
use seed_core::{Company, Contact, Deal};
use seed_graph::AssociationGraph;
use tracing::info;

use crate::error::ExportError;
use crate::kinds::ExportKind;
use crate::rows;

const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Write one export kind to `output_path`. Returns the number of data
/// rows written (excluding the header).
pub fn export_csv(
    graph: &AssociationGraph,
    kind: ExportKind,
    output_path: impl AsRef<Path>,
) -> Result<u64, ExportError> {
    let output_path = output_path.as_ref();
    if let Some(dir) = output_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(kind.header())?;

    let mut written = 0u64;
    match kind {
        ExportKind::Companies => {
            for company in graph.all_companies() {
                writer.write_record(company_record(company))?;
                written += 1;
            }
        }
        ExportKind::Contacts => {
            for contact in graph.all_contacts() {
                writer.write_record(contact_record(contact))?;
                written += 1;
            }
        }
        ExportKind::CompanyContacts => {
            for row in rows::company_contact_pairs(graph)? {
                let mut record = company_record(row.company);
                record.extend(contact_record(row.contact));
                writer.write_record(record)?;
                written += 1;
            }
        }
        ExportKind::CompanyDeals => {
            for row in rows::company_deal_pairs(graph)? {
                let mut record = company_record(row.company);
                record.extend(deal_record(row.deal));
                writer.write_record(record)?;
                written += 1;
            }
        }
        ExportKind::ContactDeals => {
            for row in rows::contact_deal_pairs(graph)? {
                let mut record = contact_record(row.contact);
                record.extend(deal_record(row.deal));
                writer.write_record(record)?;
                written += 1;
            }
        }
        ExportKind::Full => {
            for row in rows::full_rows(graph)? {
                let mut record = company_record(row.company);
                record.extend(contact_record(row.contact));
                record.extend(deal_record(row.deal));
                writer.write_record(record)?;
                written += 1;
            }
        }
    }

    writer.flush()?;
    info!(
        rows = written,
        path = %output_path.display(),
        "CSV export complete"
    );
    Ok(written)
}

fn company_record(company: &Company) -> Vec<String> {
    vec![
        company.domain.clone(),
        company.name.clone(),
        company.street.clone(),
        company.city.clone(),
        company.region.clone(),
        company.postal_code.clone(),
        company.phone.clone(),
    ]
}

fn contact_record(contact: &Contact) -> Vec<String> {
    vec![
        contact.email.clone(),
        contact.first_name.clone(),
        contact.last_name.clone(),
        contact.street.clone(),
        contact.city.clone(),
        contact.region.clone(),
        contact.postal_code.clone(),
        contact.phone.clone(),
    ]
}

fn deal_record(deal: &Deal) -> Vec<String> {
    vec![
        deal.stage.to_string(),
        deal.pipeline.clone(),
        deal.name.clone(),
        deal.description.clone(),
        // Decimal's Display is culture-invariant with a `.` separator.
        deal.amount.to_string(),
        deal.close_date.format("%d/%m/%Y").to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rust_decimal::Decimal;
    use seed_core::DealStage;
    use seed_planner::{GenerationPlan, Planner};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn fixture_graph() -> AssociationGraph {
        let mut graph = AssociationGraph::new();
        let company = Company {
            id: Uuid::new_v4(),
            domain: "acme101.example".into(),
            name: "Acme Logistics, Inc".into(),
            street: "1 Harbor Street".into(),
            city: "Portside".into(),
            region: "OR".into(),
            postal_code: "97201".into(),
            phone: "555-000-0001".into(),
        };
        let contact = Contact {
            id: Uuid::new_v4(),
            email: "ada.chen01@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Chen".into(),
            street: "2 Elm Avenue".into(),
            city: "Portside".into(),
            region: "OR".into(),
            postal_code: "97202".into(),
            phone: "555-100-0001".into(),
        };
        let deal = Deal {
            id: Uuid::new_v4(),
            name: "Refined Steel Table - Outdoors #1".into(),
            stage: DealStage::ClosedWon,
            pipeline: "default".into(),
            description: "Says \"urgent\".".into(),
            amount: Decimal::new(4975025, 2),
            close_date: DateTime::from_timestamp(1_726_000_000, 0).unwrap(),
            company_id: company.id,
            contact_id: contact.id,
        };

        let (company_id, contact_id) = (company.id, contact.id);
        graph.add_company(company).unwrap();
        graph.add_contact(contact).unwrap();
        graph.associate(contact_id, company_id).unwrap();
        graph.add_deal(deal).unwrap();
        graph
    }

    #[test]
    fn test_full_export_format() {
        let graph = fixture_graph();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("full.csv");

        let written = export_csv(&graph, ExportKind::Full, &path).unwrap();
        assert_eq!(written, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        assert!(lines[0].starts_with("Company Domain Name <COMPANY domain>,"));
        assert!(lines[0].ends_with("Close Date <DEAL closedate>"));

        // Comma in the company name gets quoted; embedded quotes are
        // doubled; amount uses a `.` separator; date is dd/MM/yyyy.
        assert!(lines[1].contains("\"Acme Logistics, Inc\""));
        assert!(lines[1].contains("\"Says \"\"urgent\"\".\""));
        assert!(lines[1].contains("closedwon"));
        assert!(lines[1].contains("49750.25"));
        assert!(lines[1].contains("10/09/2024"));
    }

    #[test]
    fn test_association_exports() {
        let graph = fixture_graph();
        let temp_dir = TempDir::new().unwrap();

        for kind in ExportKind::ALL {
            let path = temp_dir.path().join(kind.file_name());
            let written = export_csv(&graph, kind, &path).unwrap();
            assert_eq!(written, 1, "{kind:?}");

            let content = std::fs::read_to_string(&path).unwrap();
            let header = content.lines().next().unwrap();
            assert_eq!(header.split(',').count(), kind.header().len(), "{kind:?}");
        }
    }

    #[test]
    fn test_fixed_seed_produces_identical_csv() {
        let reference = DateTime::from_timestamp(1_726_000_000, 0).unwrap();
        let plan = GenerationPlan {
            company_count: 5,
            contact_count: 12,
            min_deal_count: 30,
            ..Default::default()
        };
        let temp_dir = TempDir::new().unwrap();

        let mut outputs = Vec::new();
        for run in 0..2 {
            let mut planner = Planner::new(plan.clone(), 42).with_reference_time(reference);
            let graph = planner.generate().unwrap();
            let path = temp_dir.path().join(format!("run{run}.csv"));
            export_csv(&graph, ExportKind::Full, &path).unwrap();
            outputs.push(std::fs::read(&path).unwrap());
        }

        assert_eq!(outputs[0], outputs[1]);
    }
}
