/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Tree Module
//!
//! The catalog tree is a read model of the whole Company -> Datacenter -> Object
//! graph with each datacenter's objects split into `services`, `servers` and
//! `network` buckets. [`TreeResponse::build`] is a pure function of the loaded
//! rows: it keeps the order it is given and never filters or pages.

use crate::models::companies::Company;
use crate::models::datacenters::Datacenter;
use crate::models::objects::{Object, ObjectType};
use serde::{Deserialize, Serialize};

/// Minimal projection of an object for the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub status: String,
    pub ip: Option<String>,
}

impl From<&Object> for TreeNode {
    fn from(object: &Object) -> Self {
        TreeNode {
            id: object.id,
            name: object.name.clone(),
            object_type: object.object_type,
            status: object.status.clone(),
            ip: object.ip.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDatacenter {
    pub id: i32,
    pub name: String,
    pub services: Vec<TreeNode>,
    pub servers: Vec<TreeNode>,
    pub network: Vec<TreeNode>,
}

impl TreeDatacenter {
    /// Partitions `objects` by type, keeping their relative order in each bucket.
    pub fn build(datacenter: &Datacenter, objects: &[Object]) -> Self {
        let mut services = Vec::new();
        let mut servers = Vec::new();
        let mut network = Vec::new();

        for object in objects {
            let bucket = match object.object_type {
                ObjectType::Service => &mut services,
                ObjectType::Server => &mut servers,
                ObjectType::Network => &mut network,
            };
            bucket.push(TreeNode::from(object));
        }

        TreeDatacenter {
            id: datacenter.id,
            name: datacenter.name.clone(),
            services,
            servers,
            network,
        }
    }

    /// Number of objects in all buckets.
    pub fn object_count(&self) -> usize {
        self.services.len() + self.servers.len() + self.network.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeCompany {
    pub id: i32,
    pub name: String,
    pub dcs: Vec<TreeDatacenter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeResponse {
    pub companies: Vec<TreeCompany>,
}

impl TreeResponse {
    /// Builds the tree from companies, each with its datacenters, each with its objects.
    pub fn build(catalog: &[(Company, Vec<(Datacenter, Vec<Object>)>)]) -> Self {
        let companies = catalog
            .iter()
            .map(|(company, datacenters)| TreeCompany {
                id: company.id,
                name: company.name.clone(),
                dcs: datacenters
                    .iter()
                    .map(|(dc, objects)| TreeDatacenter::build(dc, objects))
                    .collect(),
            })
            .collect();

        TreeResponse { companies }
    }
}
