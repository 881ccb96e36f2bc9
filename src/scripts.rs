//! Documentation about the various scripts contained herein
//!
//! - [check-ceph-status](#check-ceph-status)
//! - [check-ceph-df](#check-ceph-df)
//! - [check-glance-api](#check-glance-api)
//! - [check-glance-image-exists](#check-glance-image-exists)
//! - [check-gnocchi-api](#check-gnocchi-api)
//! - [check-gnocchi-resource-type-exists](#check-gnocchi-resource-type-exists)
//!
//! # check-ceph-status
//!
//! Requires the `rados` tool and a client keyring for the cluster.
//!
//! ```plain
//! $ check-ceph-status --help
//! check-ceph-status (part of openstack-plugins) 0.1.0
//! openstack-plugins contributors
//! Check that the Ceph cluster is reachable and reports its statistics
//!
//! USAGE:
//!     check-ceph-status [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!     -v, --verbose    Log what the check is doing to stderr. Repeat for more detail.
//!
//! OPTIONS:
//!         --ceph-config <config>             [default: /etc/ceph/ceph.conf]
//!         --ceph-id <id>                     Client to connect as, e.g. 'admin'
//!         --ceph-keyring <keyring>
//!         --ceph-timeout <SECONDS>           Give up connecting to the monitors after this many seconds
//!         --rados-bin <rados-bin>            The rados executable to run [default: rados]
//!
//! ```
//!
//! # check-ceph-df
//!
//! Requires the `rados` tool and a client keyring for the cluster.
//!
//! ```plain
//! $ check-ceph-df --help
//! check-ceph-df (part of openstack-plugins) 0.1.0
//! openstack-plugins contributors
//! Check used space of the Ceph cluster
//!
//! Usage is the percentage of the cluster's total space in use. If the used and available space reported by the
//! cluster don't add up to its total the check warns, whatever the usage.
//!
//! USAGE:
//!     check-ceph-df [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!     -v, --verbose    Log what the check is doing to stderr. Repeat for more detail.
//!
//! OPTIONS:
//!         --ceph-config <config>             [default: /etc/ceph/ceph.conf]
//!         --ceph-id <id>                     Client to connect as, e.g. 'admin'
//!         --ceph-keyring <keyring>
//!         --ceph-timeout <SECONDS>           Give up connecting to the monitors after this many seconds
//!         --rados-bin <rados-bin>            The rados executable to run [default: rados]
//!         --metric-critical <metric-critical>    Percent used to go critical at [default: 90]
//!         --metric-warning <metric-warning>      Percent used to warn at [default: 80]
//!
//! ```
//!
//! # check-glance-api
//!
//! Requires Keystone credentials, usually from an openrc file.
//!
//! ```plain
//! $ check-glance-api --help
//! check-glance-api (part of openstack-plugins) 0.1.0
//! openstack-plugins contributors
//! Check that the Glance API is responding by listing images
//!
//! USAGE:
//!     check-glance-api [FLAGS] [OPTIONS] --os-auth-url <auth-url> --os-password <password> --os-project-name <project-name> --os-username <username>
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!         --insecure    Do not verify TLS certificates
//!     -V, --version     Prints version information
//!     -v, --verbose     Log what the check is doing to stderr. Repeat for more detail.
//!
//! OPTIONS:
//!         --os-image-api-version <image-api-version>             [default: 2]
//!         --limit <COUNT>                                      List at most this many images. Default: all of them.
//!         --os-auth-url <auth-url>
//!             Keystone v3 url, e.g. https://keystone.example.com:5000/v3 [env: OS_AUTH_URL=]
//!
//!         --os-cacert <cacert>                                 PEM bundle to verify TLS certificates with [env: OS_CACERT=]
//!         --os-interface <interface>
//!             Which catalog endpoints to use: public, internal or admin [env: OS_INTERFACE=]  [default: public]
//!
//!         --os-password <password>                              [env: OS_PASSWORD]
//!         --os-project-domain-name <project-domain-name>
//!              [env: OS_PROJECT_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-project-name <project-name>                      [env: OS_PROJECT_NAME=]
//!         --os-region-name <region-name>                        [env: OS_REGION_NAME=]
//!         --os-timeout <SECONDS>                               Timeout for each HTTP request. Default 30.
//!         --os-user-domain-name <user-domain-name>
//!              [env: OS_USER_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-username <username>                              [env: OS_USERNAME=]
//!
//! ```
//!
//! # check-glance-image-exists
//!
//! Requires Keystone credentials, usually from an openrc file.
//!
//! ```plain
//! $ check-glance-image-exists --help
//! check-glance-image-exists (part of openstack-plugins) 0.1.0
//! openstack-plugins contributors
//! Check that an image exists in Glance
//!
//! IMAGE_NAME is tried as an image id first. If there is no image with that id, all images are listed and exactly one of
//! them must have that name. Several images with the name is a warning.
//!
//! USAGE:
//!     check-glance-image-exists [FLAGS] [OPTIONS] <IMAGE_NAME> --os-auth-url <auth-url> --os-password <password> --os-project-name <project-name> --os-username <username>
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!         --insecure    Do not verify TLS certificates
//!     -V, --version     Prints version information
//!     -v, --verbose     Log what the check is doing to stderr. Repeat for more detail.
//!
//! OPTIONS:
//!         --os-image-api-version <image-api-version>             [default: 2]
//!         --os-auth-url <auth-url>
//!             Keystone v3 url, e.g. https://keystone.example.com:5000/v3 [env: OS_AUTH_URL=]
//!
//!         --os-cacert <cacert>                                 PEM bundle to verify TLS certificates with [env: OS_CACERT=]
//!         --os-interface <interface>
//!             Which catalog endpoints to use: public, internal or admin [env: OS_INTERFACE=]  [default: public]
//!
//!         --os-password <password>                              [env: OS_PASSWORD]
//!         --os-project-domain-name <project-domain-name>
//!              [env: OS_PROJECT_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-project-name <project-name>                      [env: OS_PROJECT_NAME=]
//!         --os-region-name <region-name>                        [env: OS_REGION_NAME=]
//!         --os-timeout <SECONDS>                               Timeout for each HTTP request. Default 30.
//!         --os-user-domain-name <user-domain-name>
//!              [env: OS_USER_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-username <username>                              [env: OS_USERNAME=]
//!
//! ARGS:
//!     <IMAGE_NAME>    Id or name of the image
//!
//! ```
//!
//! # check-gnocchi-api
//!
//! Requires Keystone credentials, usually from an openrc file.
//!
//! ```plain
//! $ check-gnocchi-api --help
//! check-gnocchi-api (part of openstack-plugins) 0.1.0
//! openstack-plugins contributors
//! Check that the Gnocchi API is responding, and report its processing backlog
//!
//! USAGE:
//!     check-gnocchi-api [FLAGS] [OPTIONS] --os-auth-url <auth-url> --os-password <password> --os-project-name <project-name> --os-username <username>
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!         --insecure    Do not verify TLS certificates
//!     -V, --version     Prints version information
//!     -v, --verbose     Log what the check is doing to stderr. Repeat for more detail.
//!
//! OPTIONS:
//!         --os-tdb-api-version <tdb-api-version>                 [default: 1]
//!         --os-auth-url <auth-url>
//!             Keystone v3 url, e.g. https://keystone.example.com:5000/v3 [env: OS_AUTH_URL=]
//!
//!         --os-cacert <cacert>                                 PEM bundle to verify TLS certificates with [env: OS_CACERT=]
//!         --os-interface <interface>
//!             Which catalog endpoints to use: public, internal or admin [env: OS_INTERFACE=]  [default: public]
//!
//!         --os-password <password>                              [env: OS_PASSWORD]
//!         --os-project-domain-name <project-domain-name>
//!              [env: OS_PROJECT_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-project-name <project-name>                      [env: OS_PROJECT_NAME=]
//!         --os-region-name <region-name>                        [env: OS_REGION_NAME=]
//!         --os-timeout <SECONDS>                               Timeout for each HTTP request. Default 30.
//!         --os-user-domain-name <user-domain-name>
//!              [env: OS_USER_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-username <username>                              [env: OS_USERNAME=]
//!
//! ```
//!
//! # check-gnocchi-resource-type-exists
//!
//! Requires Keystone credentials, usually from an openrc file.
//!
//! ```plain
//! $ check-gnocchi-resource-type-exists --help
//! check-gnocchi-resource-type-exists (part of openstack-plugins) 0.1.0
//! openstack-plugins contributors
//! Check that a resource type is defined in Gnocchi
//!
//! USAGE:
//!     check-gnocchi-resource-type-exists [FLAGS] [OPTIONS] --os-auth-url <auth-url> --os-password <password> --os-project-name <project-name> --os-username <username>
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!         --insecure    Do not verify TLS certificates
//!     -V, --version     Prints version information
//!     -v, --verbose     Log what the check is doing to stderr. Repeat for more detail.
//!
//! OPTIONS:
//!         --os-tdb-api-version <tdb-api-version>                 [default: 1]
//!         --resource-type <resource-type>                        [default: generic]
//!         --os-auth-url <auth-url>
//!             Keystone v3 url, e.g. https://keystone.example.com:5000/v3 [env: OS_AUTH_URL=]
//!
//!         --os-cacert <cacert>                                 PEM bundle to verify TLS certificates with [env: OS_CACERT=]
//!         --os-interface <interface>
//!             Which catalog endpoints to use: public, internal or admin [env: OS_INTERFACE=]  [default: public]
//!
//!         --os-password <password>                              [env: OS_PASSWORD]
//!         --os-project-domain-name <project-domain-name>
//!              [env: OS_PROJECT_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-project-name <project-name>                      [env: OS_PROJECT_NAME=]
//!         --os-region-name <region-name>                        [env: OS_REGION_NAME=]
//!         --os-timeout <SECONDS>                               Timeout for each HTTP request. Default 30.
//!         --os-user-domain-name <user-domain-name>
//!              [env: OS_USER_DOMAIN_NAME=]  [default: Default]
//!
//!         --os-username <username>                              [env: OS_USERNAME=]
//!
//! ```
