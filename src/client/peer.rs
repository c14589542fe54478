//! Cluster membership

use super::GlusterClient;
use crate::command::Operation;
use crate::domain::cluster::PeerStatus;
use crate::domain::codes::HostStatus;
use crate::error::{Error, Result, PEER_NOT_FOUND_CODE};
use crate::mapper;

impl GlusterClient {
    pub fn peer_probe(&self, host: &str) -> Result<()> {
        self.run_ack(&Operation::PeerProbe {
            host: host.to_string(),
        })
    }

    /// Remove a peer from the cluster
    ///
    /// An unknown host is reported as [`Error::PeerNotFound`]; every other
    /// failure code is propagated unchanged.
    pub fn peer_detach(&self, host: &str, force: bool) -> Result<()> {
        let op = Operation::PeerDetach {
            host: host.to_string(),
            force,
        };
        match self.run_ack(&op) {
            Err(Error::CommandFailed {
                code: PEER_NOT_FOUND_CODE,
                command,
                output,
                ..
            }) => Err(Error::PeerNotFound {
                host: host.to_string(),
                command,
                output,
            }),
            other => other,
        }
    }

    /// Every cluster member, the local peer first
    ///
    /// The remote listing never includes the local peer; it is synthesized
    /// from the local address and `system:: uuid get`.
    pub fn peer_status(&self) -> Result<Vec<PeerStatus>> {
        let remote = self.run_xml(&Operation::PeerStatus, mapper::peer_status)?;

        let mut peers = Vec::with_capacity(remote.len() + 1);
        peers.push(PeerStatus {
            hostname: self.local_address().to_string(),
            uuid: self.local_uuid()?.to_string(),
            status: HostStatus::Connected,
        });
        peers.extend(remote);
        Ok(peers)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::domain::codes::HostStatus;
    use crate::domain::ports::CommandOutput;
    use crate::error::Error;
    use assert_matches::assert_matches;

    const PEERS: &str = "<peerStatus>\
        <peer><uuid>u2</uuid><hostname>node2</hostname><connected>1</connected><state>3</state></peer>\
        <peer><uuid>u3</uuid><hostname>node3</hostname><connected>0</connected><state>3</state></peer>\
        </peerStatus>";

    #[test]
    fn test_peer_status_local_first() {
        let (client, executor) = scripted_client();
        executor.push_stdout(&ok_envelope(PEERS));
        executor.push_stdout("UUID: u1\n");

        let peers = client.peer_status().unwrap();
        assert_eq!(peers.len(), 3);
        assert_eq!(peers[0].hostname, LOCAL_ADDRESS);
        assert_eq!(peers[0].uuid, "u1");
        assert_eq!(peers[0].status, HostStatus::Connected);
        assert_eq!(peers[2].status, HostStatus::Disconnected);
    }

    #[test]
    fn test_peer_status_uuid_fetched_once() {
        let (client, executor) = scripted_client();
        executor.push_stdout(&ok_envelope(PEERS));
        executor.push_stdout("UUID: u1\n");
        executor.push_stdout(&ok_envelope(PEERS));

        client.peer_status().unwrap();
        client.peer_status().unwrap();
        assert_eq!(executor.calls().len(), 3);
        assert_eq!(executor.remaining(), 0);
    }

    #[test]
    fn test_peer_detach_not_found() {
        let (client, executor) = scripted_client();
        executor.push(CommandOutput::new(
            1,
            "<cliOutput><opRet>-1</opRet><opErrno>2</opErrno>\
             <opErrstr>node9 is not part of cluster</opErrstr></cliOutput>",
            "",
        ));

        let err = client.peer_detach("node9", false).unwrap_err();
        assert_matches!(err, Error::PeerNotFound { ref host, .. } if host == "node9");
        assert_eq!(
            err.command(),
            Some("gluster --mode=script peer detach node9 --xml")
        );
    }

    #[test]
    fn test_peer_detach_other_codes_propagate() {
        let (client, executor) = scripted_client();
        executor.push(CommandOutput::new(
            1,
            "<cliOutput><opRet>-1</opRet><opErrno>30800</opErrno>\
             <opErrstr>Brick(s) with the peer node2 exist in cluster</opErrstr></cliOutput>",
            "",
        ));
        assert_matches!(
            client.peer_detach("node2", true),
            Err(Error::CommandFailed { code: 30800, .. })
        );
    }

    #[test]
    fn test_peer_probe() {
        let (client, executor) = scripted_client();
        executor.push_stdout(&ok_envelope(""));
        client.peer_probe("node4").unwrap();
        assert_eq!(
            executor.calls()[0],
            argv(&["gluster", "--mode=script", "peer", "probe", "node4", "--xml"])
        );
    }
}
