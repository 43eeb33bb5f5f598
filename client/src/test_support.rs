//! Shared fixtures for unit tests.

use crate::net::types::{User, UserList};

/// One-record response in the directory's wire format.
pub const SAMPLE_RESPONSE: &str = r#"{
  "results": [
    {
      "gender": "female",
      "name": { "title": "Ms", "first": "Shirin", "last": "Kazemi" },
      "location": {
        "street": { "number": 4312, "name": "Valiasr St" },
        "city": "Tehran",
        "state": "Tehran",
        "country": "Iran",
        "postcode": 71543,
        "coordinates": { "latitude": "35.6892", "longitude": "51.3890" }
      },
      "email": "shirin.kazemi@example.com",
      "login": { "uuid": "0b5c1d9e-6a3f-4f7c-9d2b-1e8a7c6b5d4f", "username": "bluebird204" },
      "dob": { "date": "1990-04-12T08:21:33.000Z", "age": 35 },
      "phone": "021-12345678",
      "cell": "0912-345-6789",
      "picture": {
        "large": "https://randomuser.me/api/portraits/women/12.jpg",
        "medium": "https://randomuser.me/api/portraits/med/women/12.jpg",
        "thumbnail": "https://randomuser.me/api/portraits/thumb/women/12.jpg"
      },
      "nat": "IR"
    }
  ],
  "info": { "seed": "a1b2c3", "results": 1, "page": 1, "version": "1.4" }
}"#;

pub fn sample_user() -> User {
    let list: UserList = serde_json::from_str(SAMPLE_RESPONSE).expect("sample response parses");
    list.results.into_iter().next().expect("sample has one user")
}
