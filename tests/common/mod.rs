#![allow(dead_code)]

use httpmock::prelude::*;
use scratch_client::{Client, ClientConfig};
use serde_json::{json, Value};

pub fn user_json(id: u64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "scratchteam": false,
        "history": { "joined": "2019-05-04T12:00:00.000Z" },
        "profile": {
            "id": id * 100,
            "images": {
                "90x90": format!("https://cdn2.scratch.mit.edu/get_image/user/{id}_90x90.png"),
                "60x60": format!("https://cdn2.scratch.mit.edu/get_image/user/{id}_60x60.png"),
                "55x55": format!("https://cdn2.scratch.mit.edu/get_image/user/{id}_55x55.png"),
                "50x50": format!("https://cdn2.scratch.mit.edu/get_image/user/{id}_50x50.png"),
                "32x32": format!("https://cdn2.scratch.mit.edu/get_image/user/{id}_32x32.png")
            },
            "status": "Making games",
            "bio": "I like cats.",
            "country": "Canada"
        }
    })
}

pub fn project_json(id: u64, parent: Option<u64>, root: Option<u64>) -> Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "A small game",
        "instructions": "Press the green flag",
        "visibility": "visible",
        "public": true,
        "comments_allowed": true,
        "is_published": true,
        "author": {
            "id": 7,
            "username": "author",
            "scratchteam": false,
            "history": { "joined": "2015-01-01T00:00:00.000Z" },
            "profile": { "id": null, "images": {} }
        },
        "image": format!("https://cdn2.scratch.mit.edu/get_image/project/{id}_480x360.png"),
        "images": {
            "282x218": format!("https://cdn2.scratch.mit.edu/get_image/project/{id}_282x218.png")
        },
        "history": {
            "created": "2021-01-01T00:00:00.000Z",
            "modified": "2021-02-01T00:00:00.000Z",
            "shared": "2021-03-01T00:00:00.000Z"
        },
        "stats": { "views": id * 10, "loves": id, "favorites": 0, "comments": 0, "remixes": 0 },
        "remix": { "parent": parent, "root": root }
    })
}

pub fn client_for(server: &MockServer) -> Client {
    Client::with_config(ClientConfig::with_api_url(server.base_url())).unwrap()
}
