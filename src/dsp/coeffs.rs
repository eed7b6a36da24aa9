//! Anti-aliasing and channel-shaping FIR coefficient tables.
//!
//! Blackman-windowed sinc designs, normalized to unity gain at DC,
//! built offline and keyed by the rate transition they implement.
//! The channel filters run at unity decimation and only shape the
//! passband ahead of the demodulator.

/// 960 kHz -> 192 kHz (/5)
pub static DEC_960K_192K: [f32; 250] = [
    1.86629211e-20, 3.85194768e-09, 3.39525308e-07, 1.25253351e-06, 2.37141902e-06, 2.70276639e-06,
    1.12121600e-06, -2.83849940e-06, -8.30610885e-06, -1.29686572e-05, -1.37767617e-05, -8.32846587e-06,
    3.59963714e-06, 1.91195149e-05, 3.25385787e-05, 3.71107103e-05, 2.78032134e-05, 4.07540711e-06,
    -2.85824162e-05, -5.93425165e-05, -7.52076861e-05, -6.58812303e-05, -2.86722272e-05, 2.86023761e-05,
    8.83510184e-05, 1.28046830e-04, 1.28065255e-04, 7.99849165e-05, -7.85462616e-06, -1.10256433e-04,
    -1.91594272e-04, -2.17462600e-04, -1.67980936e-04, -4.79254972e-05, 1.10737888e-04, 2.56170922e-04,
    3.32690360e-04, 3.00871142e-04, 1.54812294e-04, -7.03548309e-05, -3.05030178e-04, -4.65474283e-04,
    -4.82411154e-04, -3.28529323e-04, -3.45646113e-05, 3.13587740e-04, 5.98333936e-04, 7.08659923e-04,
    5.81244308e-04, 2.29779107e-04, -2.49745486e-04, -7.02854731e-04, -9.64610636e-04, -9.17524768e-04,
    -5.39662201e-04, 7.56454018e-05, 7.39057849e-04, 1.22123691e-03, 1.32987337e-03, 9.82574748e-04,
    2.49016612e-04, -6.56268233e-04, -1.43351618e-03, -1.79441134e-03, -1.56549820e-03, -7.62264921e-04,
    3.95644928e-04, 1.53986601e-03, 2.26730435e-03, 2.27852821e-03, 1.49415587e-03, 1.05807925e-04,
    -1.46313349e-03, -2.68237197e-03, -3.08987929e-03, -2.46084409e-03, -9.10363335e-04, 1.11279133e-03,
    2.94992753e-03, 3.94189422e-03, 3.65929595e-03, 2.07495196e-03, -3.87260412e-04, -2.95615690e-03,
    -4.74808176e-03, -5.06358116e-03, -3.64858146e-03, -8.25889774e-04, 2.56100497e-03, 5.39020901e-03,
    6.62355151e-03, 5.67465863e-03, 2.65631338e-03, -1.58983892e-03, -5.71236463e-03, -8.26643961e-03,
    -8.20353115e-03, -5.27343421e-03, -1.92320241e-04, 5.50379459e-03, 9.90151456e-03, 1.13275857e-02,
    8.94952158e-03, 3.15411523e-03, -4.44719962e-03, -1.14274767e-02, -1.52753216e-02, -1.42391522e-02,
    -8.01704560e-03, 1.95278363e-03, 1.27418332e-02, 2.07034562e-02, 2.25812077e-02, 1.66424800e-02,
    3.48745139e-03, -1.37511468e-02, -2.99442606e-02, -3.91571478e-02, -3.62131676e-02, -1.82188153e-02,
    1.43808573e-02, 5.75430312e-02, 1.04287691e-01, 1.46154230e-01, 1.75107974e-01, 1.85417175e-01,
    1.75016566e-01, 1.46001668e-01, 1.04124419e-01, 5.74229180e-02, 1.43433341e-02, -1.81617662e-02,
    -3.60808547e-02, -3.89936073e-02, -2.98035284e-02, -1.36793150e-02, 3.46740459e-03, 1.65380712e-02,
    2.24276580e-02, 2.05517592e-02, 1.26417402e-02, 1.93640956e-03, -7.94556725e-03, -1.41046206e-02,
    -1.51228478e-02, -1.13072938e-02, -4.39804016e-03, 3.11755002e-03, 8.84093155e-03, 1.11839926e-02,
    9.77060318e-03, 5.42801528e-03, -1.89566572e-04, -5.19501703e-03, -8.07699221e-03, -8.13432218e-03,
    -5.61786667e-03, -1.56264310e-03, 2.60936976e-03, 5.57114048e-03, 6.49892742e-03, 5.28568230e-03,
    2.50985577e-03, -8.08912360e-04, -3.57143326e-03, -4.95351376e-03, -4.64203931e-03, -2.88835768e-03,
    -3.78144005e-04, 2.02483883e-03, 3.56866537e-03, 3.84181657e-03, 2.87318616e-03, 1.08313903e-03,
    -8.85524267e-04, -2.39211536e-03, -3.00157226e-03, -2.60394854e-03, -1.41938483e-03, 1.02573173e-04,
    1.44746247e-03, 2.20575822e-03, 2.19331760e-03, 1.48853409e-03, 3.82174208e-04, -7.35761732e-04,
    -1.50992262e-03, -1.72937878e-03, -1.38048481e-03, -6.31489287e-04, 2.39421354e-04, 9.43939614e-04,
    1.27651739e-03, 1.17124469e-03, 7.08191134e-04, 7.24221800e-05, -5.16202738e-04, -8.76833447e-04,
    -9.20966035e-04, -6.70409382e-04, -2.37982583e-04, 2.18736108e-04, 5.52738522e-04, 6.73190250e-04,
    5.67766103e-04, 2.97232811e-04, -3.27239769e-05, -3.10662575e-04, -4.55611704e-04, -4.39052849e-04,
    -2.87333778e-04, -6.61816986e-05, 1.45420227e-04, 2.82194312e-04, 3.11549207e-04, 2.39498288e-04,
    1.03352052e-04, -4.46478119e-05, -1.56192578e-04, -2.01791628e-04, -1.77404682e-04, -1.01856787e-04,
    -7.23847786e-06, 7.35172629e-05, 1.17377836e-04, 1.17003759e-04, 8.04651881e-05, 2.59559894e-05,
    -2.59173553e-05, -5.92948642e-05, -6.73672817e-05, -5.28757500e-05, -2.53177550e-05, 3.58603489e-06,
    2.42814178e-05, 3.21330060e-05, 2.78969337e-05, 1.62044780e-05, 3.00971392e-06, -6.85157209e-06,
    -1.11125853e-05, -1.02082249e-05, -6.33805253e-06, -2.07932921e-06, 7.76683919e-07, 1.72622961e-06,
    1.33179077e-06, 5.56043924e-07, 8.48228664e-08, -9.32603919e-22,
];

/// 192 kHz -> 64 kHz (/3)
pub static DEC_192K_64K: [f32; 48] = [
    -1.84386376e-19, 1.47977518e-05, -1.24817871e-05, -1.93048845e-04, -4.34997473e-04, -3.42535324e-04,
    4.72726895e-04, 1.77100261e-03, 2.35873932e-03, 7.50509770e-04, -3.22636641e-03, -7.13619057e-03,
    -6.70584119e-03, 8.10689184e-04, 1.27042206e-02, 2.01137316e-02, 1.30612281e-02, -1.06819562e-02,
    -3.92229547e-02, -4.92459346e-02, -1.88523828e-02, 5.64020381e-02, 1.55486046e-01, 2.39303748e-01,
    2.70817155e-01, 2.35818659e-01, 1.50978691e-01, 5.39569913e-02, -1.77642061e-02, -4.56916699e-02,
    -3.58190226e-02, -9.59632956e-03, 1.15356279e-02, 1.74506980e-02, 1.08172082e-02, 6.76636390e-04,
    -5.47828223e-03, -5.69534961e-03, -2.50917514e-03, 5.66779018e-04, 1.72092061e-03, 1.23854608e-03,
    3.12838566e-04, -2.09664636e-04, -2.35479932e-04, -8.32969058e-05, -3.06256496e-06, -1.26860228e-19,
];

/// 64 kHz -> 32 kHz (/2)
pub static DEC_64K_32K: [f32; 72] = [
    8.68363238e-20, -5.34917915e-06, 1.02225727e-05, 6.15677062e-05, -2.00979510e-19, -1.89675523e-04,
    -1.13036895e-04, 3.55946059e-04, 4.22332934e-04, -4.49735739e-04, -9.90644754e-04, 2.71942385e-04,
    1.78380143e-03, 4.39375734e-04, -2.59644434e-03, -1.92835479e-03, 3.00364083e-03, 4.28742318e-03,
    -2.37818336e-03, -7.29919340e-03, 7.59809569e-18, 1.03045203e-02, 4.74783054e-03, -1.21467851e-02,
    -1.21418274e-02, 1.12070945e-02, 2.19158441e-02, -5.45803468e-03, -3.31758610e-02, -7.74361641e-03,
    4.44873762e-02, 3.31604870e-02, -5.41379381e-02, -8.65362421e-02, 6.05158928e-02, 3.12193595e-01,
    4.37499922e-01, 3.10194233e-01, 5.97423869e-02, -8.48793074e-02, -5.27566179e-02, 3.21027075e-02,
    4.27829021e-02, -7.39690218e-03, -3.14740831e-02, -5.14204737e-03, 2.05003888e-02, 1.04070246e-02,
    -1.11908242e-02, -1.11092979e-02, 4.30781183e-03, 9.27253604e-03, 6.77858056e-18, -6.45361716e-03,
    -2.08291106e-03, 3.71779786e-03, 2.57704661e-03, -1.63570893e-03, -2.17530843e-03, 3.63132935e-04,
    1.45201112e-03, 2.17556299e-04, -7.76647939e-04, -3.44114667e-04, 3.13518214e-04, 2.54068134e-04,
    -7.64746417e-05, -1.18679339e-04, -1.10989497e-19, 2.69935163e-05, 2.53436726e-06, 1.05026106e-19,
];

/// 192 kHz -> 48 kHz (/4)
pub static DEC_192K_48K: [f32; 88] = [
    9.28038630e-20, -3.33334039e-06, -7.96971665e-06, 3.27070135e-06, 4.35389847e-05, 9.97495064e-05,
    1.25457163e-04, 6.25150127e-05, -1.13183003e-04, -3.47929664e-04, -5.04454754e-04, -4.17604751e-04,
    7.11249791e-19, 6.54859723e-04, 1.24563065e-03, 1.36467257e-03, 7.15263049e-04, -6.50309740e-04,
    -2.21711991e-03, -3.13875171e-03, -2.62280262e-03, -4.25359019e-04, 2.80752373e-03, 5.60737913e-03,
    6.25371206e-03, 3.67376117e-03, -1.74549683e-03, -7.92133769e-03, -1.17150587e-02, -1.03399348e-02,
    -2.97784448e-03, 8.21237008e-03, 1.83905457e-02, 2.18138081e-02, 1.45557882e-02, -2.96772403e-03,
    -2.49381067e-02, -4.13465973e-02, -4.13596356e-02, -1.77044482e-02, 2.96803013e-02, 9.23809817e-02,
    1.55430718e-01, 2.01934038e-01, 2.18750415e-01, 2.01071948e-01, 1.54105435e-01, 9.12004951e-02,
    2.91748047e-02, -1.73274909e-02, -4.03022455e-02, -4.01119823e-02, -2.40856855e-02, -2.85335809e-03,
    1.39308713e-02, 2.07803421e-02, 1.74365031e-02, 7.74885514e-03, -2.79596275e-03, -9.65958699e-03,
    -1.08878493e-02, -7.32305491e-03, -1.60487484e-03, 3.35881050e-03, 5.68433553e-03, 5.06608781e-03,
    2.52056407e-03, -3.79372669e-04, -2.32309531e-03, -2.75981418e-03, -1.93434059e-03, -5.62658013e-04,
    6.13307498e-04, 1.15869309e-03, 1.04617438e-03, 5.43325542e-04, 5.81942007e-19, -3.36179970e-04,
    -3.98313210e-04, -2.68290826e-04, -8.47030592e-05, 4.49836888e-05, 8.55331458e-05, 6.28481332e-05,
    2.41850912e-05, 1.44036107e-06, -1.98131231e-06, 9.83602876e-20,
];

/// 48 kHz -> 16 kHz (/3)
pub static DEC_48K_16K: [f32; 64] = [
    8.12268753e-20, 2.50668001e-06, 3.56396273e-05, 7.96926567e-05, 2.69191357e-05, -1.94611708e-04,
    -4.41162679e-04, -3.60220445e-04, 2.82631163e-04, 1.17570778e-03, 1.43038217e-03, 2.58952295e-04,
    -2.01305074e-03, -3.60268277e-03, -2.38640387e-03, 1.96917510e-03, 6.67784110e-03, 7.14728034e-03,
    8.19996164e-04, -9.27811980e-03, -1.50204605e-02, -8.91725127e-03, 8.36995731e-03, 2.52467651e-02,
    2.55376015e-02, 1.50162331e-03, -3.56644676e-02, -5.75273243e-02, -3.43983325e-02, 4.33475586e-02,
    1.53505930e-01, 2.49984426e-01, 2.87511826e-01, 2.47952560e-01, 1.51017133e-01, 4.22951489e-02,
    -3.32856478e-02, -5.52008056e-02, -3.39316556e-02, 1.41632417e-03, 2.38745594e-02, 2.33895363e-02,
    7.68229548e-03, -8.10632896e-03, -1.35193300e-02, -8.26494650e-03, 7.22604991e-04, 6.22737273e-03,
    5.74905677e-03, 1.67380719e-03, -2.00084309e-03, -2.97594775e-03, -1.63575402e-03, 2.06569290e-04,
    1.11706621e-03, 8.95390549e-04, 2.08708685e-04, -2.55688930e-04, -2.96808420e-04, -1.21133774e-04,
    1.47988260e-05, 3.48180554e-05, 8.81617325e-06, -3.87207635e-20,
];

/// 2.4 MHz -> 800 kHz (/3)
pub static DEC_2400K_800K: [f32; 96] = [
    -8.75642048e-20, 8.25592440e-07, -6.44826983e-06, -2.54278621e-05, -2.74647132e-05, 2.33946956e-05,
    1.07834464e-04, 1.30209630e-04, 1.23862152e-18, -2.35774843e-04, -3.59201318e-04, -1.48482147e-04,
    3.53868852e-04, 7.44681967e-04, 5.35485149e-04, -3.41113455e-04, -1.26134022e-03, -1.27942047e-03,
    -4.58981821e-18, 1.78361063e-03, 2.45427280e-03, 9.28645706e-04, -2.04740287e-03, -4.02013200e-03,
    -2.71653654e-03, 1.63603220e-03, 5.74958273e-03, 5.56887969e-03, 2.20310163e-17, -7.16858901e-03,
    -9.53458137e-03, -3.50051652e-03, 7.51736244e-03, 1.44351456e-02, 9.57994012e-03, -5.69269633e-03,
    -1.98421150e-02, -1.91741289e-02, -3.81036043e-17, 2.51215872e-02, 3.42044237e-02, 1.30277528e-02,
    -2.95441506e-02, -6.14136334e-02, -4.57768725e-02, 3.24362815e-02, 1.50821991e-01, 2.57515985e-01,
    2.99997527e-01, 2.56593697e-01, 1.49742914e-01, 3.20884348e-02, -4.51225350e-02, -6.03162134e-02,
    -2.89103015e-02, 1.27013611e-02, 3.32237216e-02, 2.43098157e-02, -3.67324765e-17, -1.84131395e-02,
    -1.89803443e-02, -5.42389354e-03, 9.09082040e-03, 1.36419209e-02, 7.07452673e-03, -3.28020701e-03,
    -8.89535857e-03, -6.65792730e-03, 2.03670914e-17, 5.12378659e-03, 5.26406161e-03, 1.49026203e-03,
    -2.46143157e-03, -3.62257981e-03, -1.83432714e-03, 8.26976447e-04, 2.17164434e-03, 1.56753081e-03,
    -4.00457462e-18, -1.10757169e-03, -1.08264674e-03, -2.90052149e-04, 4.50586992e-04, 6.19238726e-04,
    2.90275100e-04, -1.19865950e-04, -2.84463897e-04, -1.82361070e-04, 9.29755689e-19, 9.39667781e-05,
    7.37157902e-05, 1.47748462e-05, -1.52858069e-05, -1.12142397e-05, -1.60450862e-06, -2.90566824e-20,
];

/// 800 kHz -> 160 kHz (/5)
pub static DEC_800K_160K: [f32; 200] = [
    -3.12392592e-20, 2.83065280e-07, 1.07861205e-06, 1.47707875e-06, -1.05538319e-20, -4.21326733e-06,
    -1.02360995e-05, -1.50175933e-05, -1.43693969e-05, -5.10221313e-06, 1.25734178e-05, 3.36606476e-05,
    4.90930826e-05, 4.88468181e-05, 2.66017530e-05, -1.58926846e-05, -6.69435159e-05, -1.07123935e-04,
    -1.15669646e-04, -7.92773427e-05, 8.72079456e-19, 1.01464177e-04, 1.89652068e-04, 2.25441811e-04,
    1.81365174e-04, 5.56576614e-05, -1.21078683e-04, -2.90954586e-04, -3.86032780e-04, -3.53251252e-04,
    -1.78534917e-04, 9.97371273e-05, 3.95355447e-04, 5.98617872e-04, 6.14467017e-04, 4.01979044e-04,
    -1.15490807e-18, -4.73508615e-04, -8.52729191e-04, -9.78989946e-04, -7.62299973e-04, -2.26864292e-04,
    4.79441763e-04, 1.12100292e-03, 1.44925206e-03, 1.29393772e-03, 6.38834731e-04, -3.49014832e-04,
    -1.35440317e-03, -2.00957780e-03, -2.02322665e-03, -1.29931318e-03, 2.75066761e-18, 1.47847680e-03,
    2.61986744e-03, 2.96169783e-03, 2.27240636e-03, 6.66836602e-04, -1.39050355e-03, -3.21004789e-03,
    -4.10015431e-03, -3.61912098e-03, -1.76764129e-03, 9.55982303e-04, 3.67487297e-03, 5.40481496e-03,
    5.39761987e-03, 3.44082146e-03, -4.82397518e-18, -3.86647064e-03, -6.81661236e-03, -7.67332844e-03,
    -5.86770094e-03, -1.71770785e-03, 3.57673192e-03, 8.25426942e-03, 1.05517762e-02, 9.33329565e-03,
    4.57436542e-03, -2.48626786e-03, -9.62114284e-03, -1.42710832e-02, -1.44036065e-02, -9.30120222e-03,
    6.62235504e-18, 1.08151297e-02, 1.94934634e-02, 2.25260705e-02, 1.77684121e-02, 5.39654778e-03,
    -1.17403229e-02, -2.85530141e-02, -3.88872342e-02, -3.71651951e-02, -2.00544299e-02, 1.23187001e-02,
    5.59944986e-02, 1.03809850e-01, 1.46920167e-01, 1.76843895e-01, 1.87500422e-01, 1.76699383e-01,
    1.46680111e-01, 1.03555468e-01, 5.58115615e-02, 1.22683916e-02, -1.99561374e-02, -3.69526327e-02,
    -3.86329703e-02, -2.83428979e-02, -1.16442802e-02, 5.34795694e-03, 1.75937578e-02, 2.22860081e-02,
    1.92695393e-02, 1.06818887e-02, 6.53523431e-18, -9.17103719e-03, -1.41899035e-02, -1.40472721e-02,
    -9.46207731e-03, -2.44303847e-03, 4.49090075e-03, 9.15493700e-03, 1.03409640e-02, 8.08214151e-03,
    3.49899767e-03, -1.67885412e-03, -5.72973870e-03, -7.48601077e-03, -6.64402921e-03, -3.76504538e-03,
    -4.69298572e-18, 3.34418963e-03, 5.24096626e-03, 5.24282938e-03, 3.56121630e-03, 9.25490732e-04,
    -1.70953261e-03, -3.49656792e-03, -3.95720906e-03, -3.09488316e-03, -1.33919102e-03, 6.41535863e-04,
    2.18379389e-03, 2.84304169e-03, 2.51206527e-03, 1.41601254e-03, 2.63137702e-18, -1.24148673e-03,
    -1.93084051e-03, -1.91544668e-03, -1.28933474e-03, -3.31819935e-04, 6.06562535e-04, 1.22691830e-03,
    1.37229408e-03, 1.05997524e-03, 4.52682907e-04, -2.13882803e-04, -7.17575957e-04, -9.20092686e-04,
    -8.00116307e-04, -4.43540941e-04, -1.07991587e-18, 3.75191316e-04, 5.72429428e-04, 5.56558441e-04,
    3.66814344e-04, 9.23353886e-05, -1.64906319e-04, -3.25495294e-04, -3.54788218e-04, -2.66675593e-04,
    -1.10651787e-04, 5.07057193e-05, 1.64673100e-04, 2.03948284e-04, 1.70891949e-04, 9.10321137e-05,
    7.78696892e-19, -7.04160831e-05, -1.02139132e-04, -9.39720387e-05, -5.82889432e-05, -1.37210026e-05,
    2.27431366e-05, 4.12885949e-05, 4.09433543e-05, 2.76256543e-05, 1.01195550e-05, -4.00807370e-06,
    -1.09447671e-05, -1.09834302e-05, -7.08094376e-06, -2.68790188e-06, -5.92172914e-21, 6.55304623e-07,
    2.69362497e-07, -4.37677750e-20,
];

/// 160 kHz -> 32 kHz (/5)
pub static DEC_160K_32K: [f32; 150] = [
    2.25441875e-20, 1.07781710e-07, 1.81785701e-06, 6.09223695e-06, 1.12790705e-05, 1.30722141e-05,
    6.34755059e-06, -1.16966941e-05, -3.84968725e-05, -6.48848843e-05, -7.69109327e-05, -6.08382681e-05,
    -9.94062354e-06, 6.94991596e-05, 1.55982946e-04, 2.16563638e-04, 2.16801875e-04, 1.34564703e-04,
    -2.69369554e-05, -2.32420583e-04, -4.18599955e-04, -5.10407908e-04, -4.46292471e-04, -2.05186072e-04,
    1.74738444e-04, 5.94684456e-04, 9.15994115e-04, 1.00063873e-03, 7.61123141e-04, 2.03696576e-04,
    -5.52329087e-04, -1.29136345e-03, -1.75615597e-03, -1.72873933e-03, -1.11444342e-03, 2.00646317e-18,
    1.33975490e-03, 2.49890419e-03, 3.05356851e-03, 2.70257257e-03, 1.39239246e-03, -6.19195023e-04,
    -2.79333574e-03, -4.44037936e-03, -4.92349244e-03, -3.87963474e-03, -1.38687135e-03, 1.98658272e-03,
    5.28714947e-03, 7.42471560e-03, 7.50669782e-03, 5.16153316e-03, 7.44648810e-04, -4.65801746e-03,
    -9.46126767e-03, -1.20085764e-02, -1.10905428e-02, -6.40385430e-03, 1.20199368e-03, 9.79867443e-03,
    1.67988454e-02, 1.96455933e-02, 1.66046378e-02, 7.44085621e-03, -6.23237513e-03, -2.10733535e-02,
    -3.26269944e-02, -3.63244131e-02, -2.86404810e-02, -8.11944910e-03, 2.40097824e-02, 6.38194145e-02,
    1.05316000e-01, 1.41603616e-01, 1.66319010e-01, 1.75002684e-01, 1.66076643e-01, 1.41191110e-01,
    1.04855944e-01, 6.34477494e-02, 2.38349930e-02, -8.04850323e-03, -2.83484060e-02, -3.59008226e-02,
    -3.21986494e-02, -2.07656734e-02, -6.13217249e-03, 7.31018490e-03, 1.62882873e-02, 1.92418683e-02,
    1.64283033e-02, 9.56767707e-03, 1.17182176e-03, -6.23325474e-03, -1.07778890e-02, -1.16512586e-02,
    -9.16481113e-03, -4.50464034e-03, 7.18930222e-04, 4.97486202e-03, 7.22284975e-03, 7.13159080e-03,
    5.06948768e-03, 1.90139897e-03, -1.32499533e-03, -3.69970589e-03, -4.68633737e-03, -4.21841215e-03,
    -2.64852702e-03, -5.85927080e-04, 1.31490337e-03, 2.54686186e-03, 2.87150609e-03, 2.34478025e-03,
    1.25430394e-03, 1.87415574e-18, -1.03848246e-03, -1.60695601e-03, -1.62829922e-03, -1.19419634e-03,
    -5.09373406e-04, 1.87319495e-04, 6.97844691e-04, 9.14581339e-04, 8.34462885e-04, 5.39868993e-04,
    1.58046155e-04, -1.84854035e-04, -4.00369396e-04, -4.55798286e-04, -3.71960296e-04, -2.05404863e-04,
    -2.36636008e-05, 1.17427017e-04, 1.87780532e-04, 1.85990138e-04, 1.32666243e-04, 5.84475019e-05,
    -8.24975175e-06, -4.96963852e-05, -6.16267880e-05, -5.07610653e-05, -2.92119396e-05, -8.52596331e-06,
    4.37822780e-06, 8.31930618e-06, 6.31649453e-06, 2.69905661e-06, 4.53592539e-07, -9.34021584e-21,
];

/// 32 kHz -> 16 kHz (/2)
pub static DEC_32K_16K: [f32; 48] = [
    -1.84394198e-19, 4.37861372e-06, -8.83512848e-05, -1.28996586e-04, 3.18453759e-04, 6.43968070e-04,
    -4.72746947e-04, -1.83439825e-03, 2.33494486e-18, 3.77322746e-03, 2.02826475e-03, -5.94650924e-03,
    -6.70612565e-03, 6.88673294e-03, 1.47950058e-02, -4.00103969e-03, -2.61235643e-02, -6.48344369e-03,
    3.92246185e-02, 3.05068207e-02, -5.15078526e-02, -8.44151960e-02, 6.00179195e-02, 3.12188244e-01,
    4.37492423e-01, 3.07641706e-01, 5.82780714e-02, -8.07557696e-02, -4.85347723e-02, 2.83050285e-02,
    3.58205420e-02, -5.82451952e-03, -2.30722345e-02, -3.47130690e-03, 1.25974402e-02, 5.74796631e-03,
    -5.47851462e-03, -4.74587228e-03, 1.57740034e-03, 2.84951141e-03, 1.70356033e-18, -1.28288166e-03,
    -3.12851837e-04, 3.94170533e-04, 1.72390587e-04, -5.56595740e-05, -2.16781097e-05, -3.75375897e-20,
];

/// audio 32 kHz -> 16 kHz (/2)
pub static DEC_AUDIO_32K_16K: [f32; 64] = [
    1.31423074e-19, -4.82495945e-06, 2.72763996e-05, 7.78762227e-05, -5.31735026e-05, -2.85805140e-04,
    -6.92239367e-05, 5.99002963e-04, 5.37576905e-04, -8.13835490e-04, -1.49469100e-03, 5.14296043e-04,
    2.84678032e-03, 8.46869170e-04, -4.06933985e-03, -3.69479191e-03, 4.12698296e-03, 7.94134412e-03,
    -1.63487743e-03, -1.25955320e-02, -4.69926481e-03, 1.55599674e-02, 1.54651031e-02, -1.37054890e-02,
    -3.00201613e-02, 3.00082230e-03, 4.63227562e-02, 2.24452337e-02, -6.12960521e-02, -7.87287209e-02,
    7.16678936e-02, 3.09516455e-01, 4.25002054e-01, 3.07000715e-01, 7.05059395e-02, -7.68173129e-02,
    -5.93133055e-02, 2.15375040e-02, 4.40720951e-02, 2.83036172e-03, -2.80652091e-02, -1.26972716e-02,
    1.41945158e-02, 1.41449658e-02, -4.22962476e-03, -1.12200964e-02, -1.44070258e-03, 6.91923466e-03,
    3.55298351e-03, -3.14058879e-03, -3.41187451e-03, 6.99544913e-04, 2.31322154e-03, 4.10259999e-04,
    -1.16728861e-03, -6.19797384e-04, 3.96973098e-04, 4.25179716e-04, -4.65729498e-05, -1.77896056e-04,
    -2.92321947e-05, 3.40244478e-05, 6.74736194e-06, 7.45312977e-20,
];

/// 192 kHz -> 32 kHz (/6)
pub static DEC_192K_32K: [f32; 250] = [
    3.51716552e-20, -1.35948970e-07, -3.76699405e-07, -2.63085927e-07, 7.02801630e-07, 2.70276148e-06,
    5.32459816e-06, 7.51287951e-06, 7.82628720e-06, 4.96458249e-06, -1.59014704e-06, -1.10520284e-05,
    -2.11686301e-05, -2.85736148e-05, -2.96573370e-05, -2.17730621e-05, -4.43884223e-06, 1.98777202e-05,
    4.57536770e-05, 6.57660724e-05, 7.23173656e-05, 5.99436689e-05, 2.74883893e-05, -2.05571301e-05,
    -7.41255046e-05, -1.19320434e-04, -1.41648899e-04, -1.30071985e-04, -8.08456337e-05, 1.01099209e-18,
    9.65019541e-05, 1.85384364e-04, 2.41198682e-04, 2.42967475e-04, 1.80723629e-04, 6.01060774e-05,
    -9.65768069e-05, -2.53672475e-04, -3.69672591e-04, -4.07458279e-04, -3.44929408e-04, -1.83190542e-04,
    5.02792832e-05, 3.05053112e-04, 5.17798441e-04, 6.27174341e-04, 5.90276057e-04, 3.96457708e-04,
    7.45079789e-05, -3.09604743e-04, -6.65055843e-04, -8.96606161e-04, -9.28816523e-04, -7.28150457e-04,
    -3.16910100e-04, 2.25641482e-04, 7.76816949e-04, 1.19692772e-03, 1.36324511e-03, 1.20356315e-03,
    7.20617971e-04, -1.97595999e-18, -8.02350740e-04, -1.49212363e-03, -1.88200973e-03, -1.84026697e-03,
    -1.33035495e-03, -4.30519514e-04, 6.73818086e-04, 1.72578578e-03, 2.45471274e-03, 2.64327953e-03,
    2.18804476e-03, 1.13728582e-03, -3.05743949e-04, -1.81843157e-03, -3.02814052e-03, -3.60106185e-03,
    -3.33005460e-03, -2.19922101e-03, -4.06695119e-04, 1.66411761e-03, 3.52257159e-03, 4.68321475e-03,
    4.78773168e-03, 3.70679195e-03, 1.59446215e-03, -1.12286477e-03, -3.82643054e-03, -5.84055848e-03,
    -6.59517648e-03, -5.77768498e-03, -3.43560092e-03, 4.68224658e-18, 3.78349161e-03, 7.00793639e-03,
    8.81296197e-03, 8.60161625e-03, 6.21413664e-03, 2.01219247e-03, -3.15552409e-03, -8.10964124e-03,
    -1.15927561e-02, -1.25673889e-02, -1.04927011e-02, -5.51216950e-03, 1.50112931e-03, 9.06690080e-03,
    1.53766858e-02, 1.86818023e-02, 1.77134177e-02, 1.20439402e-02, 2.30398461e-03, -9.80646540e-03,
    -2.17345379e-02, -3.04934269e-02, -3.32139523e-02, -2.77262323e-02, -1.30560442e-02, 1.02690926e-02,
    4.01763822e-02, 7.32900615e-02, 1.05427192e-01, 1.32263543e-01, 1.50050381e-01, 1.56250145e-01,
    1.49972053e-01, 1.32125480e-01, 1.05262136e-01, 7.31370785e-02, 4.00715522e-02, 1.02369366e-02,
    -1.30083410e-02, -2.76104332e-02, -3.30578532e-02, -3.03341387e-02, -2.16096020e-02, -9.74494323e-03,
    2.28831777e-03, 1.19556927e-02, 1.75742706e-02, 1.85251556e-02, 1.52395904e-02, 8.98123670e-03,
    1.48614548e-03, -5.45419795e-03, -1.03767145e-02, -1.24216970e-02, -1.14520941e-02, -8.00684013e-03,
    -3.11380380e-03, 1.98448748e-03, 6.12516174e-03, 8.47370824e-03, 8.67702260e-03, 6.89593285e-03,
    3.72090243e-03, 4.60215197e-18, -3.37488537e-03, -5.67228741e-03, -6.47108627e-03, -5.72729861e-03,
    -3.75000786e-03, -1.09978258e-03, 1.56074771e-03, 3.62621717e-03, 4.68080370e-03, 4.57580560e-03,
    3.43964755e-03, 1.62392673e-03, -3.96622413e-04, -2.14338672e-03, -3.24342436e-03, -3.50510516e-03,
    -2.94551835e-03, -1.76764473e-03, -2.97005958e-04, 1.10403546e-03, 2.12262077e-03, 2.56246939e-03,
    2.37800127e-03, 1.67066888e-03, 6.51830031e-04, -4.16168012e-04, -1.28505969e-03, -1.77628273e-03,
    -1.81519791e-03, -1.43804649e-03, -7.72668649e-04, -1.90135298e-18, 6.92850684e-04, 1.15623868e-03,
    1.30855021e-03, 1.14793062e-03, 7.44373226e-04, 2.16026984e-04, -3.03133814e-04, -6.95857700e-04,
    -8.86791455e-04, -8.55216812e-04, -6.33732005e-04, -2.94725388e-04, 7.08539069e-05, 3.76614304e-04,
    5.60119887e-04, 5.94464543e-04, 4.90224643e-04, 2.88463095e-04, 4.74861116e-05, -1.72792209e-04,
    -3.24918245e-04, -3.83289685e-04, -3.47245498e-04, -2.37925542e-04, -9.04397338e-05, 5.61941323e-05,
    1.68669985e-04, 2.26350623e-04, 2.24272139e-04, 1.72025041e-04, 8.93549597e-05, 9.33971862e-19,
    -7.45037788e-05, -1.19554245e-04, -1.29827886e-04, -1.09029948e-04, -6.75093822e-05, -1.86551162e-05,
    2.48472623e-05, 5.39509006e-05, 6.47782773e-05, 5.85993080e-05, 4.05277279e-05, 1.74908165e-05,
    -3.87658007e-06, -1.88526151e-05, -2.54267026e-05, -2.42171684e-05, -1.76994287e-05, -9.09216304e-06,
    -1.28264138e-06, 3.90785056e-06, 5.97192022e-06, 5.50352407e-06, 3.68843270e-06, 1.72622648e-06,
    3.94693945e-07, -1.16793148e-07, -9.41099899e-08, 3.29149180e-20,
];

/// 25 kHz channel shaping at 32 kHz (/1)
pub static CHANNEL_25K: [f32; 64] = [
    1.35417106e-33, -7.67807941e-06, 3.56381409e-05, -1.78185545e-05, -1.21673376e-04, 2.81178739e-04,
    -1.69340628e-04, -3.60205422e-04, 9.14575513e-04, -6.96191681e-04, -6.41959821e-04, 2.16072512e-03,
    -2.01296678e-03, -7.07724853e-04, 4.21945224e-03, -4.73030998e-03, 3.44026760e-17, 7.14698225e-03,
    -9.65529962e-03, 2.46485143e-03, 1.07530139e-02, -1.78984115e-02, 8.36960823e-03, 1.45729023e-02,
    -3.15648949e-02, 2.12487605e-02, 1.79478230e-02, -5.75249251e-02, 5.35744244e-02, 2.01985902e-02,
    -1.45844775e-01, 2.64664846e-01, 6.87499606e-01, 2.62513659e-01, -1.43480188e-01, 1.97082006e-02,
    5.18414497e-02, -5.51985034e-02, 1.70758009e-02, 2.00417326e-02, -2.95093476e-02, 1.35008754e-02,
    7.68197508e-03, -1.62707551e-02, 9.67836798e-03, 2.19568896e-03, -8.50853699e-03, 6.22711301e-03,
    2.96177963e-17, -4.02078355e-03, 3.53773390e-03, -5.84606617e-04, -1.63568580e-03, 1.72363583e-03,
    -5.01342678e-04, -5.30202710e-04, 6.75367323e-04, -2.55678266e-04, -1.13930136e-04, 1.75016407e-04,
    -6.68900796e-05, -7.78500107e-06, 8.81580556e-06, 1.18603530e-19,
];

/// 12.5 kHz channel shaping at 16 kHz (/1)
pub static CHANNEL_12K5: [f32; 64] = [
    1.35417106e-33, -7.67807941e-06, 3.56381409e-05, -1.78185545e-05, -1.21673376e-04, 2.81178739e-04,
    -1.69340628e-04, -3.60205422e-04, 9.14575513e-04, -6.96191681e-04, -6.41959821e-04, 2.16072512e-03,
    -2.01296678e-03, -7.07724853e-04, 4.21945224e-03, -4.73030998e-03, 3.44026760e-17, 7.14698225e-03,
    -9.65529962e-03, 2.46485143e-03, 1.07530139e-02, -1.78984115e-02, 8.36960823e-03, 1.45729023e-02,
    -3.15648949e-02, 2.12487605e-02, 1.79478230e-02, -5.75249251e-02, 5.35744244e-02, 2.01985902e-02,
    -1.45844775e-01, 2.64664846e-01, 6.87499606e-01, 2.62513659e-01, -1.43480188e-01, 1.97082006e-02,
    5.18414497e-02, -5.51985034e-02, 1.70758009e-02, 2.00417326e-02, -2.95093476e-02, 1.35008754e-02,
    7.68197508e-03, -1.62707551e-02, 9.67836798e-03, 2.19568896e-03, -8.50853699e-03, 6.22711301e-03,
    2.96177963e-17, -4.02078355e-03, 3.53773390e-03, -5.84606617e-04, -1.63568580e-03, 1.72363583e-03,
    -5.01342678e-04, -5.30202710e-04, 6.75367323e-04, -2.55678266e-04, -1.13930136e-04, 1.75016407e-04,
    -6.68900796e-05, -7.78500107e-06, 8.81580556e-06, 1.18603530e-19,
];

/// SSB / 6 kHz channel shaping at 16 kHz (/1)
pub static CHANNEL_SSB: [f32; 64] = [
    2.03071680e-34, -8.53131305e-06, -2.72758951e-05, 3.49518944e-05, 1.72069886e-04, 1.09709065e-04,
    -3.12896583e-04, -5.98991883e-04, 1.00801558e-18, 1.15770930e-03, 1.18617155e-03, -8.43062082e-04,
    -2.84672766e-03, -1.38823406e-03, 3.22938665e-03, 5.25597003e-03, -5.15903006e-18, -7.94119723e-03,
    -7.38974966e-03, 4.83491671e-03, 1.52068591e-02, 6.98352229e-03, -1.54648170e-02, -2.42335337e-02,
    1.15966024e-17, 3.53349347e-02, 3.31628185e-02, -2.24448185e-02, -7.57646857e-02, -3.96204412e-02,
    1.11623297e-01, 2.94075971e-01, 3.74994876e-01, 2.91685730e-01, 1.09813544e-01, -3.86585200e-02,
    -7.33139215e-02, -2.15371056e-02, 3.15515529e-02, 3.33277470e-02, 1.08414165e-17, -2.24508413e-02,
    -1.41942533e-02, 6.34845057e-03, 1.36871001e-02, 4.30694244e-03, -6.51206703e-03, -6.91910667e-03,
    -4.44148884e-18, 4.46759682e-03, 2.70762886e-03, -1.14673212e-03, -2.31317876e-03, -6.72520532e-04,
    9.26348351e-04, 8.81683341e-04, 7.44368042e-19, -4.25171851e-04, -2.10512686e-04, 6.82871203e-05,
    9.45956193e-05, 1.52706290e-05, -6.74723713e-06, 1.31783456e-19,
];
