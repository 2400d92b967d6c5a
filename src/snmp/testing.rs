//! SNMP агент на loopback для тестов транспорта.
//!
//! Разбирает запрос (GET / GETNEXT / GETBULK) и отвечает тем, что вернёт
//! переданный обработчик. Кодирование BER минимальное, только то, что
//! нужно для ответов.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::net::UdpSocket;

pub const GET: u8 = 0xA0;
pub const GET_NEXT: u8 = 0xA1;
pub const GET_BULK: u8 = 0xA5;
const RESPONSE: u8 = 0xA2;

pub fn oid(s: &str) -> Vec<u64> {
    s.split('.').map(|p| p.parse().unwrap()).collect()
}

#[derive(Debug, Clone)]
pub enum Val {
    Int(i64),
    Str(&'static str),
    Ticks(u32),
    Null,
    NoSuchObject,
    EndOfMibView,
}

impl Val {
    fn encode(&self) -> Vec<u8> {
        match self {
            Val::Int(v) => int(0x02, *v),
            Val::Str(s) => tlv(0x04, s.as_bytes()),
            Val::Ticks(t) => int(0x43, i64::from(*t)),
            Val::Null => tlv(0x05, &[]),
            Val::NoSuchObject => tlv(0x80, &[]),
            Val::EndOfMibView => tlv(0x82, &[]),
        }
    }
}

/// Разобранный запрос
#[derive(Debug)]
pub struct Incoming {
    /// Номер датаграммы, с 1
    pub seq: usize,
    pub pdu_type: u8,
    pub max_repetitions: i64,
    pub oids: Vec<Vec<u64>>,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub error_status: i64,
    pub error_index: i64,
    pub varbinds: Vec<(Vec<u64>, Val)>,
    pub delay: Duration,
}

impl Reply {
    /// Ответ без ошибки с OID запроса и NULL значениями
    pub fn echo(incoming: &Incoming) -> Self {
        Self {
            error_status: 0,
            error_index: 0,
            varbinds: incoming.oids.iter().map(|o| (o.clone(), Val::Null)).collect(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

/// Агент, отвечающий из отсортированного дерева значений.
///
/// `v1` задаёт поведение при отсутствии OID: noSuchName вместо
/// исключений SNMPv2.
pub fn mib(
    v1: bool,
    entries: &[(&str, Val)],
) -> impl Fn(&Incoming) -> Option<Reply> + Send + Sync + 'static {
    let mut tree: Vec<(Vec<u64>, Val)> = entries
        .iter()
        .map(|(o, v)| (oid(o), v.clone()))
        .collect();
    tree.sort_by(|a, b| a.0.cmp(&b.0));

    move |incoming: &Incoming| {
        let next = |from: &Vec<u64>| -> Option<(Vec<u64>, Val)> {
            tree.iter().find(|(o, _)| o > from).cloned()
        };
        let mut reply = Reply::echo(incoming);

        match incoming.pdu_type {
            GET => {
                for (i, requested) in incoming.oids.iter().enumerate() {
                    match tree.iter().find(|(o, _)| o == requested) {
                        Some((_, value)) => reply.varbinds[i].1 = value.clone(),
                        None if v1 => {
                            reply.error_status = 2;
                            reply.error_index = i as i64 + 1;
                            reply.varbinds = Reply::echo(incoming).varbinds;
                            return Some(reply);
                        }
                        None => reply.varbinds[i].1 = Val::NoSuchObject,
                    }
                }
            }
            GET_NEXT => match next(&incoming.oids[0]) {
                Some(entry) => reply.varbinds = vec![entry],
                None if v1 => {
                    reply.error_status = 2;
                    reply.error_index = 1;
                }
                None => reply.varbinds[0].1 = Val::EndOfMibView,
            },
            GET_BULK => {
                let mut current = incoming.oids[0].clone();
                reply.varbinds.clear();
                for _ in 0..incoming.max_repetitions {
                    match next(&current) {
                        Some(entry) => {
                            current = entry.0.clone();
                            reply.varbinds.push(entry);
                        }
                        None => {
                            reply.varbinds.push((current.clone(), Val::EndOfMibView));
                            break;
                        }
                    }
                }
            }
            other => panic!("unexpected PDU {other:#x}"),
        }

        Some(reply)
    }
}

pub struct FakeAgent {
    addr: SocketAddr,
    datagrams: Arc<AtomicUsize>,
}

impl FakeAgent {
    pub async fn spawn<F>(respond: F) -> Self
    where
        F: Fn(&Incoming) -> Option<Reply> + Send + Sync + 'static,
    {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let addr = socket.local_addr().unwrap();
        let datagrams = Arc::new(AtomicUsize::new(0));
        let counter = datagrams.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 65_535];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                let seq = counter.fetch_add(1, Ordering::SeqCst) + 1;
                let (header, incoming) = decode_request(&buf[..len], seq);
                let Some(reply) = respond(&incoming) else {
                    continue;
                };

                let bytes = encode_response(&header, &reply);
                let socket = socket.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(reply.delay).await;
                    let _ = socket.send_to(&bytes, peer).await;
                });
            }
        });

        Self { addr, datagrams }
    }

    pub fn target(&self) -> String {
        self.addr.to_string()
    }

    /// Сколько запросов агент получил
    pub fn datagrams(&self) -> usize {
        self.datagrams.load(Ordering::SeqCst)
    }
}

struct Header {
    version: i64,
    community: Vec<u8>,
    request_id: i64,
}

struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn tlv(&mut self) -> (u8, &'a [u8]) {
        let tag = self.buf[0];
        let (len, header) = match self.buf[1] {
            n if n < 0x80 => (n as usize, 2),
            0x81 => (self.buf[2] as usize, 3),
            0x82 => (((self.buf[2] as usize) << 8) | self.buf[3] as usize, 4),
            other => panic!("unsupported length form {other:#x}"),
        };
        let body = &self.buf[header..header + len];
        self.buf = &self.buf[header + len..];
        (tag, body)
    }

    fn nested(&mut self) -> (u8, Reader<'a>) {
        let (tag, body) = self.tlv();
        (tag, Reader { buf: body })
    }

    fn int(&mut self) -> i64 {
        let (_, body) = self.tlv();
        let sign = if body[0] & 0x80 != 0 { -1 } else { 0 };
        body.iter().fold(sign, |acc, &b| (acc << 8) | i64::from(b))
    }
}

fn decode_oid(body: &[u8]) -> Vec<u64> {
    let mut parts = vec![u64::from(body[0] / 40), u64::from(body[0] % 40)];
    let mut value = 0u64;
    for &b in &body[1..] {
        value = (value << 7) | u64::from(b & 0x7f);
        if b & 0x80 == 0 {
            parts.push(value);
            value = 0;
        }
    }
    parts
}

fn decode_request(datagram: &[u8], seq: usize) -> (Header, Incoming) {
    let (_, mut message) = Reader { buf: datagram }.nested();
    let version = message.int();
    let (_, community) = message.tlv();
    let (pdu_type, mut pdu) = message.nested();
    let request_id = pdu.int();
    let _non_repeaters = pdu.int();
    let max_repetitions = pdu.int();

    let (_, mut list) = pdu.nested();
    let mut oids = Vec::new();
    while !list.buf.is_empty() {
        let (_, mut varbind) = list.nested();
        let (_, name) = varbind.tlv();
        oids.push(decode_oid(name));
    }

    let header = Header {
        version,
        community: community.to_vec(),
        request_id,
    };
    let incoming = Incoming {
        seq,
        pdu_type,
        max_repetitions,
        oids,
    };
    (header, incoming)
}

fn tlv(tag: u8, body: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = body.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.extend([0x81, len as u8]);
    } else {
        out.extend([0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(body);
    out
}

fn int(tag: u8, value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < 7
        && ((bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xff && bytes[start + 1] & 0x80 != 0))
    {
        start += 1;
    }
    tlv(tag, &bytes[start..])
}

fn encode_oid(parts: &[u64]) -> Vec<u8> {
    let mut body = vec![(parts[0] * 40 + parts[1]) as u8];
    for &part in &parts[2..] {
        let mut chunk = vec![(part & 0x7f) as u8];
        let mut rest = part >> 7;
        while rest > 0 {
            chunk.push((rest & 0x7f) as u8 | 0x80);
            rest >>= 7;
        }
        chunk.reverse();
        body.extend(chunk);
    }
    tlv(0x06, &body)
}

fn encode_response(header: &Header, reply: &Reply) -> Vec<u8> {
    let varbinds: Vec<u8> = reply
        .varbinds
        .iter()
        .flat_map(|(name, value)| tlv(0x30, &[encode_oid(name), value.encode()].concat()))
        .collect();

    let pdu = [
        int(0x02, header.request_id),
        int(0x02, reply.error_status),
        int(0x02, reply.error_index),
        tlv(0x30, &varbinds),
    ]
    .concat();

    let message = [
        int(0x02, header.version),
        tlv(0x04, &header.community),
        tlv(RESPONSE, &pdu),
    ]
    .concat();

    tlv(0x30, &message)
}
