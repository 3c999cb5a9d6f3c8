/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Demo data for a fresh installation.
//!
//! The three demo accounts are always (re)written. Each demo company is seeded
//! on its own, keyed by name: a company that already exists is left untouched,
//! and a company whose seeding fails partway is deleted again, so the next run
//! starts it from scratch.

use crate::dal::DAL;
use crate::utils::password::hash_password;
use itdocs_models::models::{
    Company, DocumentKind, NewCompany, NewDatacenter, NewDocument, NewIncident, NewObject,
    NewPage, NewRelation, NewUser, Object, ObjectType, PageSection, Role,
};
use itdocs_utils::logging::prelude::*;
use std::error::Error;

type SeedResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Fills an already created company and returns how many objects it wrote.
type CompanySeeder = fn(&DAL, &Company) -> SeedResult<usize>;

const DEMO_COMPANIES: &[(&str, CompanySeeder)] = &[
    ("Первый Дом", seed_first_house),
    ("Первая приемная", seed_reception),
];

const DEMO_USERS: &[(&str, Role, &str)] = &[
    ("admin", Role::Admin, "Admin"),
    ("editor", Role::Editor, "Editor"),
    ("viewer", Role::Viewer, "Viewer"),
];

/// What a seeding run wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub companies: usize,
    pub objects: usize,
}

/// Writes the demo accounts and every demo company not yet in the catalog.
///
/// Demo passwords equal the usernames.
pub fn seed_demo_data(dal: &DAL) -> SeedResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for (username, role, full_name) in DEMO_USERS {
        let new_user = NewUser::new(
            username.to_string(),
            hash_password(username).map_err(|e| e.to_string())?,
            *role,
            full_name.to_string(),
        )?;
        dal.users().upsert(&new_user)?;
        summary.users += 1;
    }

    for (name, seeder) in DEMO_COMPANIES {
        if dal.companies().get_by_name(name)?.is_some() {
            info!("Company {} already exists, skipping", name);
            continue;
        }

        let company = dal.companies().create(&NewCompany::new(name.to_string())?)?;
        match seeder(dal, &company) {
            Ok(objects) => {
                debug!("Seeded {} objects for company {}", objects, company.name);
                summary.companies += 1;
                summary.objects += objects;
            }
            Err(e) => {
                error!("Seeding company {} failed: {}", company.name, e);
                if let Err(cleanup) = dal.companies().delete(company.id) {
                    error!("Failed to remove partial company {}: {}", company.id, cleanup);
                }
                return Err(e);
            }
        }
    }

    info!(
        "Seeded {} users, {} companies, {} objects",
        summary.users, summary.companies, summary.objects
    );
    Ok(summary)
}

fn add_object(
    dal: &DAL,
    dc_id: i32,
    object_type: ObjectType,
    name: &str,
    status: &str,
    ip: Option<&str>,
) -> SeedResult<Object> {
    let mut new_object = NewObject::new(dc_id, object_type, name.to_string())?.with_status(status);
    if let Some(ip) = ip {
        new_object = new_object.with_ip(ip);
    }

    let pages: Vec<NewPage> = NewPage::for_object(0)
        .into_iter()
        .map(|page| {
            let section = page.section;
            page.with_content(section_stub(name, section))
        })
        .collect();

    Ok(dal.objects().create_with_pages(&new_object, &pages)?)
}

fn section_stub(name: &str, section: PageSection) -> String {
    format!("## {}: {}\n\nОписание.", name, section)
}

fn seed_first_house(dal: &DAL, company: &Company) -> SeedResult<usize> {
    let dc = dal
        .datacenters()
        .create(&NewDatacenter::new(company.id, "Прохорова".to_string())?)?;

    let services = [
        ("RDS (Terminal Farm)", "ok"),
        ("Exchange", "ok"),
        ("VPN", "warn"),
    ];
    let servers = [
        ("PD-RDCB01", "10.98.10.10"),
        ("PD-RDGW01", "10.98.10.11"),
        ("PD-RDSH01", "10.98.10.21"),
        ("PD-RDSH02", "10.98.10.22"),
        ("PD-EXCH01", "10.98.20.10"),
        ("PD-DC01", "10.98.1.71"),
        ("PD-FS01", "10.98.30.10"),
    ];
    let network = [
        ("PD-FW-01", "10.98.0.1", "warn"),
        ("PD-SW-CORE-01", "10.98.0.2", "ok"),
    ];

    let svc = services
        .iter()
        .map(|(name, status)| add_object(dal, dc.id, ObjectType::Service, name, status, None))
        .collect::<Result<Vec<_>, _>>()?;
    let srv = servers
        .iter()
        .map(|(name, ip)| add_object(dal, dc.id, ObjectType::Server, name, "ok", Some(*ip)))
        .collect::<Result<Vec<_>, _>>()?;
    let net = network
        .iter()
        .map(|(name, ip, status)| {
            add_object(dal, dc.id, ObjectType::Network, name, status, Some(*ip))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (src, dst) in [(&svc[0], &srv[0]), (&svc[1], &srv[4]), (&svc[2], &net[0])] {
        dal.relations().create(&NewRelation::new(
            src.id,
            dst.id,
            Some("uses".to_string()),
            None,
        )?)?;
    }

    dal.incidents().create(
        &NewIncident::new(svc[0].id, "Проблемы с сессиями".to_string())?
            .with_severity("high")
            .with_details(
                "Пользователи не могут подключиться",
                "RDCB",
                "Проверить службы",
                "Перезапуск",
            ),
    )?;
    dal.incidents().create(
        &NewIncident::new(srv[2].id, "Высокая нагрузка".to_string())?
            .with_severity("medium")
            .with_details("CPU 100%", "Много сессий", "Проверить процессы", "Добавить узел"),
    )?;

    for (object, title, url) in [
        (&svc[0], "Схема RDS", "https://example.com/rds"),
        (&svc[1], "Exchange plan", "https://example.com/exch"),
    ] {
        dal.documents().create(&NewDocument::new(
            object.id,
            title.to_string(),
            DocumentKind::Link,
            None,
            Some(url.to_string()),
        )?)?;
    }

    Ok(svc.len() + srv.len() + net.len())
}

fn seed_reception(dal: &DAL, company: &Company) -> SeedResult<usize> {
    let dc = dal
        .datacenters()
        .create(&NewDatacenter::new(company.id, "Машкова".to_string())?)?;

    let services = [("1C (App + DB)", "ok"), ("RDS (Office)", "warn"), ("Backup", "ok")];
    let servers = [
        ("PP-1C01", "10.96.3.11"),
        ("PP-PG01", "10.96.3.12"),
        ("PP-RDSH01", "10.96.4.21"),
        ("PP-DC01", "10.96.11.71"),
        ("PP-FS01", "10.96.5.10"),
    ];
    let network = [("PP-FW-01", "10.96.0.1", "ok"), ("PP-SW-CORE-01", "10.96.0.2", "ok")];

    let mut count = 0;
    for (name, status) in services {
        add_object(dal, dc.id, ObjectType::Service, name, status, None)?;
        count += 1;
    }
    for (name, ip) in servers {
        add_object(dal, dc.id, ObjectType::Server, name, "ok", Some(ip))?;
        count += 1;
    }
    for (name, ip, status) in network {
        add_object(dal, dc.id, ObjectType::Network, name, status, Some(ip))?;
        count += 1;
    }
    Ok(count)
}
