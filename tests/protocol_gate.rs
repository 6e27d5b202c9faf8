use tagwire::{protocol, Error, Protocol, Record};

#[derive(Debug, PartialEq, Record)]
struct Request {
    id: u32,
    body: String,
}

#[derive(Debug, PartialEq, Record)]
struct Response {
    id: u32,
    ok: bool,
}

struct Echo;

impl Protocol for Echo {
    type Request = Request;
    type Response = Response;
}

#[test]
fn declared_protocol_round_trips_through_the_gate() {
    let req = Request {
        id: 1,
        body: "hello".to_string(),
    };
    let bytes = protocol::send_request::<Echo, _>(&req).unwrap();
    let back: Request = protocol::recv_request::<Echo, _>(&bytes).unwrap();
    assert_eq!(back, req);

    let resp = Response { id: 1, ok: true };
    let bytes = protocol::send_response::<Echo, _>(&resp).unwrap();
    let back: Response = protocol::recv_response::<Echo, _>(&bytes).unwrap();
    assert_eq!(back, resp);
}

#[test]
fn mismatched_leg_is_rejected_before_any_bytes_move() {
    let err = protocol::send_request::<Echo, u32>(&7).unwrap_err();
    assert_eq!(err, Error::InvalidInterfaceMethod);
}
