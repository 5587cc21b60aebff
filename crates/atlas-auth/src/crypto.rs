//! Credential sealing for the login request.
//!
//! The login service expects the password field encrypted with a
//! pre-shared key in the CryptoJS `AES.encrypt(message, passphrase)`
//! format: an OpenSSL `Salted__` envelope carrying an 8-byte salt and an
//! AES-256-CBC ciphertext whose key and IV are derived from the
//! passphrase with MD5-based `EVP_BytesToKey`, all base64-encoded.
//!
//! A pre-shared symmetric key is not a substitute for transport security;
//! this preserves the wire format the backend already speaks.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

const SALT_LEN: usize = 8;
const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;
const OPENSSL_MAGIC: &[u8; 8] = b"Salted__";

/// Seal a password with the pre-shared key, producing the base64 envelope
/// the login service expects.
pub fn seal_password(plain: &str, passphrase: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    seal_with_salt(plain.as_bytes(), passphrase.as_bytes(), &salt)
}

fn seal_with_salt(plain: &[u8], passphrase: &[u8], salt: &[u8; SALT_LEN]) -> String {
    let (key, iv) = derive_key_iv(passphrase, salt);
    let ciphertext =
        Aes256CbcEnc::new(&key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plain);

    let mut envelope = Vec::with_capacity(OPENSSL_MAGIC.len() + SALT_LEN + ciphertext.len());
    envelope.extend_from_slice(OPENSSL_MAGIC);
    envelope.extend_from_slice(salt);
    envelope.extend_from_slice(&ciphertext);

    BASE64.encode(envelope)
}

/// OpenSSL `EVP_BytesToKey` with MD5 and a single round per block:
/// D1 = MD5(passphrase || salt), Dn = MD5(Dn-1 || passphrase || salt),
/// concatenated until 48 bytes of key + IV material exist.
fn derive_key_iv(passphrase: &[u8], salt: &[u8]) -> ([u8; KEY_LEN], [u8; IV_LEN]) {
    let mut material = Vec::with_capacity(KEY_LEN + IV_LEN);
    let mut block: Vec<u8> = Vec::new();

    while material.len() < KEY_LEN + IV_LEN {
        let mut input = block.clone();
        input.extend_from_slice(passphrase);
        input.extend_from_slice(salt);
        block = md5::compute(&input).0.to_vec();
        material.extend_from_slice(&block);
    }

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&material[..KEY_LEN]);
    iv.copy_from_slice(&material[KEY_LEN..KEY_LEN + IV_LEN]);
    (key, iv)
}
