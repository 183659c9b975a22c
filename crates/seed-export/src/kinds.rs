//! Export kinds and their fixed column layouts.

/// Column headers for the company field block.
pub(crate) const COMPANY_COLUMNS: [&str; 7] = [
    "Company Domain Name <COMPANY domain>",
    "Company name <COMPANY name>",
    "Address <COMPANY address>",
    "City <COMPANY city>",
    "State/Region <COMPANY state>",
    "Postal Code <COMPANY zip>",
    "Phone Number <COMPANY phone>",
];

/// Column headers for the contact field block.
pub(crate) const CONTACT_COLUMNS: [&str; 7] = [
    "Email <CONTACT email>",
    "First Name <CONTACT firstname>",
    "Last Name <CONTACT lastname>",
    "Address <CONTACT address>",
    "City <CONTACT city>",
    "State/Region <CONTACT state>",
    "Postal Code <CONTACT zip>",
];

/// The contact phone column is shared by several kinds but sits after
/// the address block in the original layout.
pub(crate) const CONTACT_PHONE_COLUMN: &str = "Phone Number <CONTACT phone>";

/// Column headers for the deal field block.
pub(crate) const DEAL_COLUMNS: [&str; 6] = [
    "Deal Stage <DEAL dealstage>",
    "Pipeline <DEAL pipeline>",
    "Deal Name <DEAL dealname>",
    "Description <DEAL description>",
    "Amount <DEAL amount>",
    "Close Date <DEAL closedate>",
];

/// Which denormalized shape an export file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// One row per company.
    Companies,
    /// One row per contact.
    Contacts,
    /// One row per associated (company, contact) pair.
    CompanyContacts,
    /// One row per (company, deal) pair.
    CompanyDeals,
    /// One row per (contact, deal) pair.
    ContactDeals,
    /// One fully denormalized company+contact+deal row per deal.
    Full,
}

impl ExportKind {
    pub const ALL: [ExportKind; 6] = [
        ExportKind::Companies,
        ExportKind::Contacts,
        ExportKind::CompanyContacts,
        ExportKind::CompanyDeals,
        ExportKind::ContactDeals,
        ExportKind::Full,
    ];

    /// The fixed header row for this kind.
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = Vec::new();
        match self {
            ExportKind::Companies => header.extend(COMPANY_COLUMNS),
            ExportKind::Contacts => {
                header.extend(CONTACT_COLUMNS);
                header.push(CONTACT_PHONE_COLUMN);
            }
            ExportKind::CompanyContacts => {
                header.extend(COMPANY_COLUMNS);
                header.extend(CONTACT_COLUMNS);
                header.push(CONTACT_PHONE_COLUMN);
            }
            ExportKind::CompanyDeals => {
                header.extend(COMPANY_COLUMNS);
                header.extend(DEAL_COLUMNS);
            }
            ExportKind::ContactDeals => {
                header.extend(CONTACT_COLUMNS);
                header.push(CONTACT_PHONE_COLUMN);
                header.extend(DEAL_COLUMNS);
            }
            ExportKind::Full => {
                header.extend(COMPANY_COLUMNS);
                header.extend(CONTACT_COLUMNS);
                header.push(CONTACT_PHONE_COLUMN);
                header.extend(DEAL_COLUMNS);
            }
        }
        header
    }

    /// Default output file name for this kind.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportKind::Companies => "companies.csv",
            ExportKind::Contacts => "contacts.csv",
            ExportKind::CompanyContacts => "company_contacts.csv",
            ExportKind::CompanyDeals => "company_deals.csv",
            ExportKind::ContactDeals => "contact_deals.csv",
            ExportKind::Full => "company_contact_deals.csv",
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "companies" => Ok(ExportKind::Companies),
            "contacts" => Ok(ExportKind::Contacts),
            "company-contacts" => Ok(ExportKind::CompanyContacts),
            "company-deals" => Ok(ExportKind::CompanyDeals),
            "contact-deals" => Ok(ExportKind::ContactDeals),
            "full" => Ok(ExportKind::Full),
            other => Err(format!(
                "unknown export kind '{other}' (expected companies, contacts, \
                 company-contacts, company-deals, contact-deals, or full)"
            )),
        }
    }
}
