/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use itdocs_models::models::{NewCompany, ObjectType, TreeCompany};
use itdocs_server::utils::seed::seed_demo_data;
use std::collections::HashSet;

use crate::fixtures::TestFixture;

fn find_company(companies: &[TreeCompany], id: i32) -> &TreeCompany {
    companies
        .iter()
        .find(|c| c.id == id)
        .expect("Company missing from tree")
}

#[test]
fn test_tree_groups_objects_by_type() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let web = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");
    let db = fixture.insert_test_object(dc.id, ObjectType::Server, "DB");

    let tree = fixture.dal.tree().get().expect("Failed to build tree");
    let acme = find_company(&tree.companies, company.id);

    assert_eq!(acme.name, company.name);
    assert_eq!(acme.dcs.len(), 1);
    let dc1 = &acme.dcs[0];
    assert_eq!(dc1.name, "DC1");
    assert_eq!(dc1.services.len(), 1);
    assert_eq!(dc1.services[0].id, web.id);
    assert_eq!(dc1.services[0].name, "Web");
    assert_eq!(dc1.services[0].status, "ok");
    assert_eq!(dc1.servers.len(), 1);
    assert_eq!(dc1.servers[0].id, db.id);
    assert!(dc1.network.is_empty());
}

#[test]
fn test_tree_places_every_object_exactly_once() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc1 = fixture.insert_test_datacenter(company.id, "DC1");
    let dc2 = fixture.insert_test_datacenter(company.id, "DC2");
    fixture.insert_test_datacenter(company.id, "Empty");

    let mut inserted = Vec::new();
    for (dc, object_type, name) in [
        (&dc1, ObjectType::Service, "mail"),
        (&dc1, ObjectType::Server, "srv-1"),
        (&dc1, ObjectType::Server, "srv-2"),
        (&dc1, ObjectType::Network, "core-sw"),
        (&dc2, ObjectType::Service, "crm"),
        (&dc2, ObjectType::Network, "edge-fw"),
    ] {
        inserted.push(fixture.insert_test_object(dc.id, object_type, name));
    }

    let tree = fixture.dal.tree().get().unwrap();
    let acme = find_company(&tree.companies, company.id);
    assert_eq!(acme.dcs.len(), 3);
    assert_eq!(acme.dcs[2].object_count(), 0);

    let mut seen = Vec::new();
    for dc in &acme.dcs {
        for (bucket, expected) in [
            (&dc.services, ObjectType::Service),
            (&dc.servers, ObjectType::Server),
            (&dc.network, ObjectType::Network),
        ] {
            for node in bucket {
                assert_eq!(node.object_type, expected);
                let object = inserted.iter().find(|o| o.id == node.id).unwrap();
                assert_eq!(object.dc_id, dc.id);
                seen.push(node.id);
            }
        }
    }

    let unique: HashSet<i32> = seen.iter().copied().collect();
    assert_eq!(seen.len(), inserted.len());
    let expected: HashSet<i32> = inserted.iter().map(|o| o.id).collect();
    assert_eq!(unique, expected);

    let dc1_servers: Vec<&str> = acme.dcs[0].servers.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(dc1_servers, vec!["srv-1", "srv-2"]);
}

#[test]
fn test_tree_is_stable_without_writes() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    fixture.insert_test_object(dc.id, ObjectType::Network, "sw");

    let first = fixture.dal.tree().get().unwrap();
    let second = fixture.dal.tree().get().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_company_without_datacenters_is_listed() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Bare");

    let tree = fixture.dal.tree().get().unwrap();
    assert!(find_company(&tree.companies, company.id).dcs.is_empty());
}

#[test]
fn test_seed_demo_data_is_repeatable() {
    let fixture = TestFixture::new();

    seed_demo_data(&fixture.dal).expect("First seed failed");
    let companies_after_first = fixture.dal.companies().list().unwrap().len();
    let tree_after_first = fixture.dal.tree().get().unwrap();

    let second = seed_demo_data(&fixture.dal).expect("Second seed failed");
    assert_eq!(second.users, 3);
    assert_eq!(second.companies, 0);
    assert_eq!(second.objects, 0);
    assert_eq!(fixture.dal.companies().list().unwrap().len(), companies_after_first);
    assert_eq!(fixture.dal.tree().get().unwrap(), tree_after_first);

    for username in ["admin", "editor", "viewer"] {
        assert!(fixture.dal.users().get_by_username(username).unwrap().is_some());
    }
}

#[test]
fn test_seed_fills_in_missing_demo_companies() {
    let fixture = TestFixture::new();
    let existing = fixture
        .dal
        .companies()
        .create(&NewCompany::new("Первый Дом".to_string()).unwrap())
        .unwrap();

    let summary = seed_demo_data(&fixture.dal).expect("Seed failed");
    assert_eq!(summary.companies, 1);
    assert_eq!(summary.objects, 10);

    let reception = fixture
        .dal
        .companies()
        .get_by_name("Первая приемная")
        .unwrap()
        .expect("Missing demo company was not seeded");
    let tree = fixture.dal.tree().get().unwrap();
    assert_eq!(find_company(&tree.companies, reception.id).dcs.len(), 1);
    assert!(find_company(&tree.companies, existing.id).dcs.is_empty());
}
