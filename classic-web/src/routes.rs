//! Request handlers. Every cipher route takes a JSON body and answers with
//! `{"result": ...}` on success or a 400 `{"error", "kind"}` body on failure.

use axum::{http::StatusCode, response::Json};
use classic_core::ciphers::{affine, caesar, hill, playfair};
use classic_core::math::assert_integer;
use classic_core::{
    AffineKey, CipherError, Direction, HillKeyInput, PlayfairKeySquare,
    crack_hill_key_known_plaintext,
};
use log::debug;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize)]
pub(crate) struct CaesarRequest {
    direction: Direction,
    text: String,
    shift: f64,
}

#[derive(Deserialize)]
pub(crate) struct AffineRequest {
    direction: Direction,
    text: String,
    a: f64,
    b: f64,
}

#[derive(Deserialize)]
pub(crate) struct PlayfairRequest {
    direction: Direction,
    text: String,
    key: String,
}

#[derive(Deserialize)]
pub(crate) struct PlayfairSquareRequest {
    key: String,
}

/// A Hill key as it arrives over JSON: `"HILL"` or `[[7, 8], [11, 11]]`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum HillKeyBody {
    Text(String),
    Matrix([[f64; 2]; 2]),
}

#[derive(Deserialize)]
pub(crate) struct HillRequest {
    direction: Direction,
    text: String,
    key: HillKeyBody,
}

#[derive(Deserialize)]
pub(crate) struct HillCrackRequest {
    known_plaintext: String,
    known_ciphertext: String,
}

fn respond(result: Result<Value, CipherError>) -> (StatusCode, Json<Value>) {
    match result {
        Ok(value) => (StatusCode::OK, Json(json!({ "result": value }))),
        Err(e) => {
            debug!("Rejected request: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string(), "kind": e.kind() })),
            )
        }
    }
}

pub(crate) async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn caesar_handler(Json(req): Json<CaesarRequest>) -> (StatusCode, Json<Value>) {
    let result = assert_integer(req.shift, "shift").map(|shift| match req.direction {
        Direction::Encrypt => caesar::encrypt(&req.text, shift),
        Direction::Decrypt => caesar::decrypt(&req.text, shift),
    });
    respond(result.map(Value::from))
}

pub(crate) async fn affine_handler(Json(req): Json<AffineRequest>) -> (StatusCode, Json<Value>) {
    let result = AffineKey::from_numbers(req.a, req.b).and_then(|key| match req.direction {
        Direction::Encrypt => affine::encrypt(&req.text, &key),
        Direction::Decrypt => affine::decrypt(&req.text, &key),
    });
    respond(result.map(Value::from))
}

pub(crate) async fn playfair_handler(
    Json(req): Json<PlayfairRequest>,
) -> (StatusCode, Json<Value>) {
    let result = match req.direction {
        Direction::Encrypt => playfair::encrypt(&req.text, &req.key),
        Direction::Decrypt => playfair::decrypt(&req.text, &req.key),
    };
    respond(result.map(Value::from))
}

pub(crate) async fn playfair_square_handler(
    Json(req): Json<PlayfairSquareRequest>,
) -> (StatusCode, Json<Value>) {
    let result = PlayfairKeySquare::new(&req.key).map(|square| json!(square.rows()));
    respond(result)
}

pub(crate) async fn hill_handler(Json(req): Json<HillRequest>) -> (StatusCode, Json<Value>) {
    let key = match req.key {
        HillKeyBody::Text(key) => Ok(HillKeyInput::Text(key)),
        HillKeyBody::Matrix(entries) => hill::matrix_from_numbers(entries).map(HillKeyInput::Matrix),
    };
    let result = key.and_then(|key| match req.direction {
        Direction::Encrypt => hill::encrypt(&req.text, &key),
        Direction::Decrypt => hill::decrypt(&req.text, &key),
    });
    respond(result.map(Value::from))
}

pub(crate) async fn hill_crack_handler(
    Json(req): Json<HillCrackRequest>,
) -> (StatusCode, Json<Value>) {
    let result = crack_hill_key_known_plaintext(&req.known_plaintext, &req.known_ciphertext)
        .map(|recovered| json!(recovered));
    respond(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(body: Value) -> Json<T> {
        Json(serde_json::from_value(body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health_handler().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_caesar_roundtrip() {
        let (status, Json(body)) = caesar_handler(parse(json!({
            "direction": "encrypt", "text": "Hello, World!", "shift": 3
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": "Khoor, Zruog!" }));

        let (_, Json(body)) = caesar_handler(parse(json!({
            "direction": "decrypt", "text": "Khoor, Zruog!", "shift": 3
        })))
        .await;
        assert_eq!(body["result"], "Hello, World!");
    }

    #[tokio::test]
    async fn test_caesar_rejects_fractional_shift() {
        let (status, Json(body)) = caesar_handler(parse(json!({
            "direction": "encrypt", "text": "abc", "shift": 2.5
        })))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "InvalidKey");
    }

    #[tokio::test]
    async fn test_affine_known_vector_and_bad_key() {
        let (status, Json(body)) = affine_handler(parse(json!({
            "direction": "encrypt", "text": "AFFINE CIPHER", "a": 17, "b": 20
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "UBBAHK CAPJKX");

        let (status, Json(body)) = affine_handler(parse(json!({
            "direction": "decrypt", "text": "abc", "a": 2, "b": 0
        })))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "InvalidKey");
    }

    #[tokio::test]
    async fn test_playfair_and_square() {
        let (status, Json(body)) = playfair_handler(parse(json!({
            "direction": "encrypt", "text": "instrumentsx", "key": "MONARCHY"
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "gatlmzclrqxa");

        let (_, Json(body)) = playfair_handler(parse(json!({
            "direction": "decrypt", "text": "abc", "key": "MONARCHY"
        })))
        .await;
        assert_eq!(body["kind"], "OddLength");

        let (_, Json(body)) =
            playfair_square_handler(parse(json!({ "key": "MONARCHY" }))).await;
        assert_eq!(
            body["result"],
            json!(["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"])
        );
    }

    #[tokio::test]
    async fn test_hill_accepts_string_and_matrix_keys() {
        let (status, Json(body)) = hill_handler(parse(json!({
            "direction": "encrypt", "text": "short example", "key": "HILL"
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "APADJTFTWLFJ");

        let (_, Json(body)) = hill_handler(parse(json!({
            "direction": "decrypt", "text": "APADJTFTWLFJ", "key": [[7, 8], [11, 11]]
        })))
        .await;
        assert_eq!(body["result"], "SHORTEXAMPLE");

        let (status, Json(body)) = hill_handler(parse(json!({
            "direction": "encrypt", "text": "test", "key": [[2, 4], [1, 2]]
        })))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "KeyNotInvertible");
    }

    #[tokio::test]
    async fn test_hill_crack() {
        let (status, Json(body)) = hill_crack_handler(parse(json!({
            "known_plaintext": "short example", "known_ciphertext": "APADJTFTWLFJ"
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["result"],
            json!({ "matrix": [[7, 8], [11, 11]], "keyString": "HILL" })
        );

        let (_, Json(body)) = hill_crack_handler(parse(json!({
            "known_plaintext": "ab", "known_ciphertext": "cd"
        })))
        .await;
        assert_eq!(body["kind"], "InsufficientData");
    }
}
